use indexmap::IndexMap;

use crate::schema_metadata::domain::model::{
    entities::table_metadata::TableMetadata, enums::database_type::DatabaseType,
};

/// Full description of every user table, keyed by table name in
/// enumeration order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaSnapshot {
    pub database_type: DatabaseType,
    pub tables: IndexMap<String, TableMetadata>,
}

impl SchemaSnapshot {
    pub fn new(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            tables: IndexMap::new(),
        }
    }

    pub fn insert_table(&mut self, table_name: String, metadata: TableMetadata) {
        self.tables.insert(table_name, metadata);
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    pub fn table(&self, table_name: &str) -> Option<&TableMetadata> {
        self.tables.get(table_name)
    }
}
