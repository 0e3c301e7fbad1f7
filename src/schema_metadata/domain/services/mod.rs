pub mod schema_metadata_query_service;
