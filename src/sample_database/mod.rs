use sqlx::SqlitePool;
use tracing::info;

const SAMPLE_SCHEMA: &str = include_str!("../../sql/sample_schema.sql");
const SAMPLE_DATA: &str = include_str!("../../sql/sample_data.sql");

/// Drops and recreates the sample `users`/`posts`/`tags`/`post_tag` schema,
/// then fills it with example rows.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SAMPLE_SCHEMA).execute(pool).await?;
    info!("sample schema created");

    sqlx::raw_sql(SAMPLE_DATA).execute(pool).await?;
    info!("sample data inserted");

    Ok(())
}
