use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, Sqlite, pool::PoolConnection};
use tracing::debug;

use crate::schema_metadata::{
    domain::model::enums::{
        database_type::DatabaseType, schema_metadata_domain_error::SchemaMetadataDomainError,
    },
    infrastructure::persistence::repositories::{
        catalog_reader_repository::{
            CatalogReaderRepository, CatalogSession, ColumnCatalogRecord, ForeignKeyCatalogRecord,
            IndexCatalogRecord, IndexColumnCatalogRecord,
        },
        sqlite::sqlite_connection_provider::SqliteConnectionProvider,
    },
};

const LIST_TABLES_STATEMENT: &str = r#"
    SELECT name
    FROM sqlite_master
    WHERE type = 'table'
        AND name NOT LIKE 'sqlite_%'
"#;

const LIST_COLUMNS_STATEMENT: &str = r#"
    SELECT
        cid AS position,
        name,
        type AS declared_type,
        "notnull" AS not_null,
        dflt_value AS default_value,
        pk AS primary_key_ordinal
    FROM pragma_table_info(?1)
    ORDER BY cid
"#;

const LIST_FOREIGN_KEYS_STATEMENT: &str = r#"
    SELECT
        id,
        seq,
        "table" AS referenced_table,
        "from" AS local_column,
        "to" AS referenced_column,
        on_update,
        on_delete,
        "match" AS match_type
    FROM pragma_foreign_key_list(?1)
"#;

const LIST_INDEXES_STATEMENT: &str = r#"
    SELECT
        name,
        "unique" AS is_unique,
        origin,
        partial AS is_partial
    FROM pragma_index_list(?1)
"#;

const LIST_INDEX_COLUMNS_STATEMENT: &str = r#"
    SELECT
        seqno AS key_position,
        name AS column_name
    FROM pragma_index_info(?1)
    ORDER BY seqno
"#;

pub struct SqlxSqliteCatalogReaderRepositoryImpl {
    connection_provider: Arc<SqliteConnectionProvider>,
}

impl SqlxSqliteCatalogReaderRepositoryImpl {
    pub fn new(connection_provider: Arc<SqliteConnectionProvider>) -> Self {
        Self {
            connection_provider,
        }
    }
}

#[async_trait]
impl CatalogReaderRepository for SqlxSqliteCatalogReaderRepositoryImpl {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::Sqlite
    }

    async fn open_session(&self) -> Result<Box<dyn CatalogSession>, SchemaMetadataDomainError> {
        let connection = self
            .connection_provider
            .acquire()
            .await
            .map_err(map_sqlx_error)?;

        Ok(Box::new(SqlxSqliteCatalogSession { connection }))
    }
}

/// Holds a pooled connection; dropping the session hands it back to the pool.
struct SqlxSqliteCatalogSession {
    connection: PoolConnection<Sqlite>,
}

#[async_trait]
impl CatalogSession for SqlxSqliteCatalogSession {
    async fn list_table_names(&mut self) -> Result<Vec<String>, SchemaMetadataDomainError> {
        let rows = sqlx::query(LIST_TABLES_STATEMENT)
            .fetch_all(&mut *self.connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| row.try_get::<String, _>("name").map_err(map_sqlx_error))
            .collect()
    }

    async fn list_columns(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ColumnCatalogRecord>, SchemaMetadataDomainError> {
        debug!(table_name, "reading column catalog");

        let rows = sqlx::query(LIST_COLUMNS_STATEMENT)
            .bind(table_name)
            .fetch_all(&mut *self.connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| -> Result<ColumnCatalogRecord, sqlx::Error> {
                Ok(ColumnCatalogRecord {
                    position: row.try_get("position")?,
                    name: row.try_get("name")?,
                    declared_type: row.try_get("declared_type")?,
                    not_null: row.try_get::<i64, _>("not_null")? != 0,
                    default_value: row.try_get("default_value")?,
                    primary_key_ordinal: row.try_get("primary_key_ordinal")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn list_foreign_keys(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ForeignKeyCatalogRecord>, SchemaMetadataDomainError> {
        debug!(table_name, "reading foreign key catalog");

        let rows = sqlx::query(LIST_FOREIGN_KEYS_STATEMENT)
            .bind(table_name)
            .fetch_all(&mut *self.connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| -> Result<ForeignKeyCatalogRecord, sqlx::Error> {
                Ok(ForeignKeyCatalogRecord {
                    id: row.try_get("id")?,
                    seq: row.try_get("seq")?,
                    referenced_table: row.try_get("referenced_table")?,
                    local_column: row.try_get("local_column")?,
                    referenced_column: row.try_get("referenced_column")?,
                    on_update: row.try_get("on_update")?,
                    on_delete: row.try_get("on_delete")?,
                    match_type: row.try_get("match_type")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn list_indexes(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<IndexCatalogRecord>, SchemaMetadataDomainError> {
        debug!(table_name, "reading index catalog");

        let rows = sqlx::query(LIST_INDEXES_STATEMENT)
            .bind(table_name)
            .fetch_all(&mut *self.connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| -> Result<IndexCatalogRecord, sqlx::Error> {
                Ok(IndexCatalogRecord {
                    name: row.try_get("name")?,
                    is_unique: row.try_get::<i64, _>("is_unique")? != 0,
                    origin: row.try_get("origin")?,
                    is_partial: row.try_get::<i64, _>("is_partial")? != 0,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn list_index_columns(
        &mut self,
        index_name: &str,
    ) -> Result<Vec<IndexColumnCatalogRecord>, SchemaMetadataDomainError> {
        debug!(index_name, "reading index key columns");

        let rows = sqlx::query(LIST_INDEX_COLUMNS_STATEMENT)
            .bind(index_name)
            .fetch_all(&mut *self.connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| -> Result<IndexColumnCatalogRecord, sqlx::Error> {
                Ok(IndexColumnCatalogRecord {
                    key_position: row.try_get("key_position")?,
                    column_name: row.try_get("column_name")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }
}

fn map_sqlx_error(error: sqlx::Error) -> SchemaMetadataDomainError {
    match error {
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => {
            SchemaMetadataDomainError::UnexpectedError(error.to_string())
        }
        _ => SchemaMetadataDomainError::DatabaseError(error.to_string()),
    }
}
