pub mod table_name;
