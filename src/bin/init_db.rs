use dotenvy::dotenv;
use schema_metadata_api::{
    config::app_config::AppConfig,
    sample_database,
    schema_metadata::infrastructure::persistence::repositories::sqlite::sqlite_connection_provider::SqliteConnectionProvider,
    shared::infrastructure::telemetry::init_tracing,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.log_level);

    let connection_provider = SqliteConnectionProvider::connect(&config)
        .await
        .expect("failed to open database connection pool");

    let result = sample_database::initialize(connection_provider.pool()).await;
    connection_provider.close().await;

    match result {
        Ok(()) => info!(database_url = %config.database_url, "database initialized with example data"),
        Err(e) => {
            error!(error = %e, "database initialization failed");
            std::process::exit(1);
        }
    }
}
