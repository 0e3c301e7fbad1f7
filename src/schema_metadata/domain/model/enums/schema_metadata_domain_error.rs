use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaMetadataDomainError {
    #[error("table name is invalid")]
    InvalidTableName,

    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
