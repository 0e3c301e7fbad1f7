use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use schema_metadata_api::{
    config::app_config::AppConfig,
    schema_metadata::{
        build_schema_metadata_router,
        infrastructure::persistence::repositories::sqlite::sqlite_connection_provider::SqliteConnectionProvider,
        interfaces::rest::resources::{
            error_response_resource::ErrorResponseResource,
            foreign_key_constraint_resource::ForeignKeyConstraintResource,
            schema_snapshot_resource::SchemaSnapshotResource,
            table_metadata_resource::{
                ColumnResource, ForeignKeyResource, IndexResource, TableMetadataResource,
                UniqueConstraintResource,
            },
        },
    },
    shared::{
        infrastructure::telemetry::init_tracing,
        interfaces::rest::{
            controllers::root_rest_controller,
            resources::service_discovery_resource::ServiceDiscoveryResource,
        },
    },
};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Database Metadata API",
        description = "API for retrieving metadata from database tables"
    ),
    paths(
        schema_metadata_api::shared::interfaces::rest::controllers::root_rest_controller::discover_service,
        schema_metadata_api::schema_metadata::interfaces::rest::controllers::schema_metadata_rest_controller::list_tables,
        schema_metadata_api::schema_metadata::interfaces::rest::controllers::schema_metadata_rest_controller::describe_schema,
        schema_metadata_api::schema_metadata::interfaces::rest::controllers::schema_metadata_rest_controller::describe_table,
        schema_metadata_api::schema_metadata::interfaces::rest::controllers::schema_metadata_rest_controller::list_foreign_key_constraints
    ),
    components(
        schemas(
            ServiceDiscoveryResource,
            ErrorResponseResource,
            SchemaSnapshotResource,
            TableMetadataResource,
            ColumnResource,
            ForeignKeyResource,
            IndexResource,
            UniqueConstraintResource,
            ForeignKeyConstraintResource
        )
    ),
    tags(
        (name = "metadata", description = "Schema metadata read from the database catalog"),
        (name = "discovery", description = "Service discovery helper")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.log_level);

    let connection_provider = Arc::new(
        SqliteConnectionProvider::connect(&config)
            .await
            .expect("failed to open database connection pool"),
    );

    let app = Router::new()
        .merge(root_rest_controller::router())
        .merge(build_schema_metadata_router(connection_provider.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .expect("failed to bind server address");

    info!("server listening on http://{}", config.bind_address());
    info!("Swagger UI available at http://{}/docs", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");

    connection_provider.close().await;
    info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
