pub mod config;
pub mod sample_database;
pub mod schema_metadata;
pub mod shared;
