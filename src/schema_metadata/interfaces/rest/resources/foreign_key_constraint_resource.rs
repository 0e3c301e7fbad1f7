use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema_metadata::domain::model::entities::foreign_key_constraint::ForeignKeyConstraint;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ForeignKeyConstraintResource {
    pub id: i64,
    pub table: String,
    pub from: Vec<String>,
    pub to: Vec<Option<String>>,
    pub on_update: String,
    pub on_delete: String,
    #[serde(rename = "match")]
    pub match_type: String,
}

impl From<ForeignKeyConstraint> for ForeignKeyConstraintResource {
    fn from(constraint: ForeignKeyConstraint) -> Self {
        Self {
            id: constraint.id,
            table: constraint.referenced_table,
            from: constraint.local_columns,
            to: constraint.referenced_columns,
            on_update: constraint.on_update,
            on_delete: constraint.on_delete,
            match_type: constraint.match_type,
        }
    }
}
