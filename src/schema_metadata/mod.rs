use std::sync::Arc;

use axum::Router;

use crate::schema_metadata::{
    application::query_services::schema_metadata_query_service_impl::SchemaMetadataQueryServiceImpl,
    infrastructure::persistence::repositories::sqlite::{
        sqlite_connection_provider::SqliteConnectionProvider,
        sqlx_sqlite_catalog_reader_repository_impl::SqlxSqliteCatalogReaderRepositoryImpl,
    },
    interfaces::rest::controllers::schema_metadata_rest_controller::{
        SchemaMetadataRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_schema_metadata_router(connection_provider: Arc<SqliteConnectionProvider>) -> Router {
    let catalog_reader = Arc::new(SqlxSqliteCatalogReaderRepositoryImpl::new(
        connection_provider,
    ));
    let query_service = Arc::new(SchemaMetadataQueryServiceImpl::new(catalog_reader));

    router(SchemaMetadataRestControllerState { query_service })
}
