pub mod foreign_key_constraint;
pub mod schema_snapshot;
pub mod table_metadata;
