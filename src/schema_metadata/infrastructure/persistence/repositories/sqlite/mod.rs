pub mod sqlite_connection_provider;
pub mod sqlx_sqlite_catalog_reader_repository_impl;
