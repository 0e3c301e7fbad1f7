pub mod describe_schema_query;
pub mod describe_table_query;
pub mod list_foreign_key_constraints_query;
pub mod list_tables_query;
