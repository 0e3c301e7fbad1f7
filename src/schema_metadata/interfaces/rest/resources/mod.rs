pub mod error_response_resource;
pub mod foreign_key_constraint_resource;
pub mod schema_snapshot_resource;
pub mod table_metadata_resource;
