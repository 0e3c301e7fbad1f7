use async_trait::async_trait;

use crate::schema_metadata::domain::model::{
    entities::{
        foreign_key_constraint::ForeignKeyConstraint, schema_snapshot::SchemaSnapshot,
        table_metadata::TableMetadata,
    },
    enums::schema_metadata_domain_error::SchemaMetadataDomainError,
    queries::{
        describe_schema_query::DescribeSchemaQuery, describe_table_query::DescribeTableQuery,
        list_foreign_key_constraints_query::ListForeignKeyConstraintsQuery,
        list_tables_query::ListTablesQuery,
    },
};

#[async_trait]
pub trait SchemaMetadataQueryService: Send + Sync {
    async fn handle_list_tables(
        &self,
        query: ListTablesQuery,
    ) -> Result<Vec<String>, SchemaMetadataDomainError>;

    async fn handle_describe_schema(
        &self,
        query: DescribeSchemaQuery,
    ) -> Result<SchemaSnapshot, SchemaMetadataDomainError>;

    async fn handle_describe_table(
        &self,
        query: DescribeTableQuery,
    ) -> Result<TableMetadata, SchemaMetadataDomainError>;

    async fn handle_list_foreign_key_constraints(
        &self,
        query: ListForeignKeyConstraintsQuery,
    ) -> Result<Vec<ForeignKeyConstraint>, SchemaMetadataDomainError>;
}
