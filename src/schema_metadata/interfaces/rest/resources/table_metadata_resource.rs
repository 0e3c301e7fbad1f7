use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema_metadata::domain::model::entities::table_metadata::{
    ColumnMetadata, ForeignKeyMetadata, IndexMetadata, TableMetadata, UniqueConstraintMetadata,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ColumnResource {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ForeignKeyResource {
    pub id: i64,
    pub seq: i64,
    pub table: String,
    pub from: String,
    pub to: Option<String>,
    pub on_update: String,
    pub on_delete: String,
    #[serde(rename = "match")]
    pub match_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IndexResource {
    pub name: String,
    pub unique: bool,
    pub columns: Vec<Option<String>>,
    pub origin: String,
    pub partial: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UniqueConstraintResource {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableMetadataResource {
    pub columns: Vec<ColumnResource>,
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKeyResource>,
    pub indexes: Vec<IndexResource>,
    pub unique_constraints: Vec<UniqueConstraintResource>,
}

impl From<ColumnMetadata> for ColumnResource {
    fn from(column: ColumnMetadata) -> Self {
        Self {
            name: column.name,
            data_type: column.declared_type,
            nullable: column.nullable,
            default: column.default_value,
            primary_key: column.is_primary_key,
        }
    }
}

impl From<ForeignKeyMetadata> for ForeignKeyResource {
    fn from(foreign_key: ForeignKeyMetadata) -> Self {
        Self {
            id: foreign_key.id,
            seq: foreign_key.seq,
            table: foreign_key.referenced_table,
            from: foreign_key.local_column,
            to: foreign_key.referenced_column,
            on_update: foreign_key.on_update,
            on_delete: foreign_key.on_delete,
            match_type: foreign_key.match_type,
        }
    }
}

impl From<IndexMetadata> for IndexResource {
    fn from(index: IndexMetadata) -> Self {
        Self {
            name: index.name,
            unique: index.is_unique,
            columns: index.columns,
            origin: index.origin,
            partial: index.is_partial,
        }
    }
}

impl From<UniqueConstraintMetadata> for UniqueConstraintResource {
    fn from(constraint: UniqueConstraintMetadata) -> Self {
        Self {
            name: constraint.name,
            columns: constraint.columns,
        }
    }
}

impl From<TableMetadata> for TableMetadataResource {
    fn from(metadata: TableMetadata) -> Self {
        let primary_key = metadata
            .primary_key_columns()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            columns: metadata.columns.into_iter().map(Into::into).collect(),
            primary_key,
            foreign_keys: metadata.foreign_keys.into_iter().map(Into::into).collect(),
            indexes: metadata.indexes.into_iter().map(Into::into).collect(),
            unique_constraints: metadata
                .unique_constraints
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
