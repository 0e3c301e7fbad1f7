use async_trait::async_trait;

use crate::schema_metadata::domain::model::enums::{
    database_type::DatabaseType, schema_metadata_domain_error::SchemaMetadataDomainError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnCatalogRecord {
    pub position: i64,
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    /// 1-based position inside the primary key, 0 when not part of it.
    pub primary_key_ordinal: i64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignKeyCatalogRecord {
    pub id: i64,
    pub seq: i64,
    pub referenced_table: String,
    pub local_column: String,
    pub referenced_column: Option<String>,
    pub on_update: String,
    pub on_delete: String,
    pub match_type: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexCatalogRecord {
    pub name: String,
    pub is_unique: bool,
    pub origin: String,
    pub is_partial: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexColumnCatalogRecord {
    pub key_position: i64,
    pub column_name: Option<String>,
}

/// Engine-specific access to the catalog. Each engine keeps its query text
/// behind this trait.
#[async_trait]
pub trait CatalogReaderRepository: Send + Sync {
    fn database_type(&self) -> DatabaseType;

    /// Acquires a session that holds one connection until it is dropped.
    async fn open_session(&self) -> Result<Box<dyn CatalogSession>, SchemaMetadataDomainError>;
}

#[async_trait]
pub trait CatalogSession: Send {
    async fn list_table_names(&mut self) -> Result<Vec<String>, SchemaMetadataDomainError>;

    async fn list_columns(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ColumnCatalogRecord>, SchemaMetadataDomainError>;

    async fn list_foreign_keys(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ForeignKeyCatalogRecord>, SchemaMetadataDomainError>;

    async fn list_indexes(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<IndexCatalogRecord>, SchemaMetadataDomainError>;

    /// Key columns of one index, ordered by key position.
    async fn list_index_columns(
        &mut self,
        index_name: &str,
    ) -> Result<Vec<IndexColumnCatalogRecord>, SchemaMetadataDomainError>;
}
