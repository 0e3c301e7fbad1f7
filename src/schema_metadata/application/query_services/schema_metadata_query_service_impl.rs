use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::schema_metadata::{
    domain::{
        model::{
            entities::{
                foreign_key_constraint::ForeignKeyConstraint,
                schema_snapshot::SchemaSnapshot,
                table_metadata::{ColumnMetadata, ForeignKeyMetadata, IndexMetadata, TableMetadata},
            },
            enums::schema_metadata_domain_error::SchemaMetadataDomainError,
            queries::{
                describe_schema_query::DescribeSchemaQuery,
                describe_table_query::DescribeTableQuery,
                list_foreign_key_constraints_query::ListForeignKeyConstraintsQuery,
                list_tables_query::ListTablesQuery,
            },
            value_objects::table_name::TableName,
        },
        services::schema_metadata_query_service::SchemaMetadataQueryService,
    },
    infrastructure::persistence::repositories::catalog_reader_repository::{
        CatalogReaderRepository, CatalogSession,
    },
};

pub struct SchemaMetadataQueryServiceImpl {
    catalog_reader: Arc<dyn CatalogReaderRepository>,
}

impl SchemaMetadataQueryServiceImpl {
    pub fn new(catalog_reader: Arc<dyn CatalogReaderRepository>) -> Self {
        Self { catalog_reader }
    }

    async fn describe_existing_table(
        &self,
        table_name: &TableName,
    ) -> Result<TableMetadata, SchemaMetadataDomainError> {
        let mut session = self.catalog_reader.open_session().await?;

        let table_names = session.list_table_names().await?;
        if !table_names.iter().any(|name| name == table_name.value()) {
            return Err(SchemaMetadataDomainError::TableNotFound(
                table_name.value().to_string(),
            ));
        }

        describe_table(session.as_mut(), table_name.value()).await
    }
}

/// Assembles one table from its column, foreign key and index catalogs.
async fn describe_table(
    session: &mut dyn CatalogSession,
    table_name: &str,
) -> Result<TableMetadata, SchemaMetadataDomainError> {
    let columns = session
        .list_columns(table_name)
        .await?
        .into_iter()
        .map(|record| ColumnMetadata {
            name: record.name,
            declared_type: record.declared_type,
            nullable: !record.not_null,
            default_value: record.default_value,
            is_primary_key: record.primary_key_ordinal != 0,
        })
        .collect::<Vec<_>>();

    let foreign_keys = session
        .list_foreign_keys(table_name)
        .await?
        .into_iter()
        .map(|record| ForeignKeyMetadata {
            id: record.id,
            seq: record.seq,
            referenced_table: record.referenced_table,
            local_column: record.local_column,
            referenced_column: record.referenced_column,
            on_update: record.on_update,
            on_delete: record.on_delete,
            match_type: record.match_type,
        })
        .collect::<Vec<_>>();

    let index_records = session.list_indexes(table_name).await?;
    let mut indexes = Vec::with_capacity(index_records.len());
    for record in index_records {
        // key order comes from the catalog and is kept as is
        let key_columns = session
            .list_index_columns(&record.name)
            .await?
            .into_iter()
            .map(|column| column.column_name)
            .collect::<Vec<_>>();

        indexes.push(IndexMetadata {
            name: record.name,
            is_unique: record.is_unique,
            origin: record.origin,
            is_partial: record.is_partial,
            columns: key_columns,
        });
    }

    debug!(
        table_name,
        columns = columns.len(),
        foreign_keys = foreign_keys.len(),
        indexes = indexes.len(),
        "table assembled"
    );

    Ok(TableMetadata::new(columns, foreign_keys, indexes))
}

#[async_trait]
impl SchemaMetadataQueryService for SchemaMetadataQueryServiceImpl {
    #[instrument(skip_all)]
    async fn handle_list_tables(
        &self,
        _query: ListTablesQuery,
    ) -> Result<Vec<String>, SchemaMetadataDomainError> {
        let mut session = self.catalog_reader.open_session().await?;

        let table_names = session.list_table_names().await.inspect_err(|error| {
            warn!(%error, "table enumeration failed");
        })?;

        info!(tables = table_names.len(), "tables listed");
        Ok(table_names)
    }

    #[instrument(skip_all)]
    async fn handle_describe_schema(
        &self,
        _query: DescribeSchemaQuery,
    ) -> Result<SchemaSnapshot, SchemaMetadataDomainError> {
        let mut session = self.catalog_reader.open_session().await?;
        let mut snapshot = SchemaSnapshot::new(self.catalog_reader.database_type());

        let table_names = session.list_table_names().await?;
        for table_name in table_names {
            let metadata = describe_table(session.as_mut(), &table_name)
                .await
                .inspect_err(|error| {
                    warn!(%error, table_name = %table_name, "schema description aborted");
                })?;
            snapshot.insert_table(table_name, metadata);
        }

        info!(tables = snapshot.tables.len(), "schema described");
        Ok(snapshot)
    }

    #[instrument(skip_all, fields(table_name = %query.table_name().value()))]
    async fn handle_describe_table(
        &self,
        query: DescribeTableQuery,
    ) -> Result<TableMetadata, SchemaMetadataDomainError> {
        self.describe_existing_table(query.table_name()).await
    }

    #[instrument(skip_all, fields(table_name = %query.table_name().value()))]
    async fn handle_list_foreign_key_constraints(
        &self,
        query: ListForeignKeyConstraintsQuery,
    ) -> Result<Vec<ForeignKeyConstraint>, SchemaMetadataDomainError> {
        let metadata = self.describe_existing_table(query.table_name()).await?;
        Ok(metadata.foreign_key_constraints())
    }
}
