use crate::schema_metadata::domain::model::enums::schema_metadata_domain_error::SchemaMetadataDomainError;

const INTERNAL_TABLE_PREFIX: &str = "sqlite_";

/// Name of a user table as it appears in the catalog.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(value: String) -> Result<Self, SchemaMetadataDomainError> {
        let valid = !value.trim().is_empty()
            && !value.contains('\0')
            && !value.to_ascii_lowercase().starts_with(INTERNAL_TABLE_PREFIX);

        if !valid {
            return Err(SchemaMetadataDomainError::InvalidTableName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
