pub mod database_type;
pub mod schema_metadata_domain_error;
