use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema_metadata::{
    domain::model::entities::schema_snapshot::SchemaSnapshot,
    interfaces::rest::resources::table_metadata_resource::TableMetadataResource,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SchemaSnapshotResource {
    pub database_type: String,
    /// Table name to table metadata, in enumeration order.
    #[schema(value_type = Object)]
    pub tables: IndexMap<String, TableMetadataResource>,
}

impl From<SchemaSnapshot> for SchemaSnapshotResource {
    fn from(snapshot: SchemaSnapshot) -> Self {
        Self {
            database_type: snapshot.database_type.as_str().to_string(),
            tables: snapshot
                .tables
                .into_iter()
                .map(|(table_name, metadata)| (table_name, metadata.into()))
                .collect(),
        }
    }
}
