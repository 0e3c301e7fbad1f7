use crate::schema_metadata::domain::model::{
    enums::schema_metadata_domain_error::SchemaMetadataDomainError,
    value_objects::table_name::TableName,
};

#[derive(Clone, Debug)]
pub struct ListForeignKeyConstraintsQuery {
    table_name: TableName,
}

impl ListForeignKeyConstraintsQuery {
    pub fn new(table_name: String) -> Result<Self, SchemaMetadataDomainError> {
        Ok(Self {
            table_name: TableName::new(table_name)?,
        })
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
}
