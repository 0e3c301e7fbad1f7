use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use schema_metadata_api::schema_metadata::{
    domain::model::enums::{
        database_type::DatabaseType, schema_metadata_domain_error::SchemaMetadataDomainError,
    },
    infrastructure::persistence::repositories::catalog_reader_repository::{
        CatalogReaderRepository, CatalogSession, ColumnCatalogRecord, ForeignKeyCatalogRecord,
        IndexCatalogRecord, IndexColumnCatalogRecord,
    },
};

#[derive(Clone, Debug, Default)]
pub struct FakeTable {
    pub columns: Vec<ColumnCatalogRecord>,
    pub foreign_keys: Vec<ForeignKeyCatalogRecord>,
    pub indexes: Vec<IndexCatalogRecord>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogFailure {
    OpenSession,
    ListTables,
    Columns(String),
    ForeignKeys(String),
    Indexes(String),
    IndexColumns(String),
}

#[derive(Default)]
struct FakeCatalogState {
    tables: Vec<(String, FakeTable)>,
    index_columns: HashMap<String, Vec<IndexColumnCatalogRecord>>,
    failure: Option<CatalogFailure>,
    sessions_opened: usize,
    sessions_released: usize,
    calls: Vec<String>,
}

pub struct FakeCatalogReaderRepository {
    state: Arc<Mutex<FakeCatalogState>>,
}

impl FakeCatalogReaderRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeCatalogState::default())),
        }
    }

    pub fn add_table(&self, table_name: &str, table: FakeTable) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tables
            .push((table_name.to_string(), table));
    }

    pub fn set_index_columns(&self, index_name: &str, columns: Vec<IndexColumnCatalogRecord>) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .index_columns
            .insert(index_name.to_string(), columns);
    }

    pub fn fail_on(&self, failure: CatalogFailure) {
        self.state.lock().expect("mutex poisoned").failure = Some(failure);
    }

    pub fn sessions_opened(&self) -> usize {
        self.state.lock().expect("mutex poisoned").sessions_opened
    }

    pub fn sessions_released(&self) -> usize {
        self.state.lock().expect("mutex poisoned").sessions_released
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").calls.clone()
    }
}

#[async_trait]
impl CatalogReaderRepository for FakeCatalogReaderRepository {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::Sqlite
    }

    async fn open_session(&self) -> Result<Box<dyn CatalogSession>, SchemaMetadataDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.failure == Some(CatalogFailure::OpenSession) {
            return Err(SchemaMetadataDomainError::DatabaseError(
                "unable to open database file".to_string(),
            ));
        }

        state.sessions_opened += 1;
        Ok(Box::new(FakeCatalogSession {
            state: self.state.clone(),
        }))
    }
}

struct FakeCatalogSession {
    state: Arc<Mutex<FakeCatalogState>>,
}

impl FakeCatalogSession {
    fn record(&self, call: String, failure: CatalogFailure) -> Result<(), SchemaMetadataDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls.push(call);

        if state.failure.as_ref() == Some(&failure) {
            return Err(SchemaMetadataDomainError::DatabaseError(
                "connection dropped".to_string(),
            ));
        }

        Ok(())
    }

    fn table(&self, table_name: &str) -> FakeTable {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tables
            .iter()
            .find(|(name, _)| name == table_name)
            .map(|(_, table)| table.clone())
            .unwrap_or_default()
    }
}

impl Drop for FakeCatalogSession {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.sessions_released += 1;
        }
    }
}

#[async_trait]
impl CatalogSession for FakeCatalogSession {
    async fn list_table_names(&mut self) -> Result<Vec<String>, SchemaMetadataDomainError> {
        self.record("tables".to_string(), CatalogFailure::ListTables)?;

        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .tables
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn list_columns(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ColumnCatalogRecord>, SchemaMetadataDomainError> {
        self.record(
            format!("columns:{table_name}"),
            CatalogFailure::Columns(table_name.to_string()),
        )?;
        Ok(self.table(table_name).columns)
    }

    async fn list_foreign_keys(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<ForeignKeyCatalogRecord>, SchemaMetadataDomainError> {
        self.record(
            format!("foreign_keys:{table_name}"),
            CatalogFailure::ForeignKeys(table_name.to_string()),
        )?;
        Ok(self.table(table_name).foreign_keys)
    }

    async fn list_indexes(
        &mut self,
        table_name: &str,
    ) -> Result<Vec<IndexCatalogRecord>, SchemaMetadataDomainError> {
        self.record(
            format!("indexes:{table_name}"),
            CatalogFailure::Indexes(table_name.to_string()),
        )?;
        Ok(self.table(table_name).indexes)
    }

    async fn list_index_columns(
        &mut self,
        index_name: &str,
    ) -> Result<Vec<IndexColumnCatalogRecord>, SchemaMetadataDomainError> {
        self.record(
            format!("index_columns:{index_name}"),
            CatalogFailure::IndexColumns(index_name.to_string()),
        )?;

        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .index_columns
            .get(index_name)
            .cloned()
            .unwrap_or_default())
    }
}
