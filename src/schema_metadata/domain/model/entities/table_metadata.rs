use crate::schema_metadata::domain::model::entities::foreign_key_constraint::ForeignKeyConstraint;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnMetadata {
    pub name: String,
    /// Type text exactly as declared, e.g. `VARCHAR(50)`.
    pub declared_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
}

/// One (constraint, column) pair of a foreign key. Rows sharing `id` belong
/// to the same constraint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignKeyMetadata {
    pub id: i64,
    pub seq: i64,
    pub referenced_table: String,
    pub local_column: String,
    /// `None` when the constraint targets the parent's implicit primary key.
    pub referenced_column: Option<String>,
    pub on_update: String,
    pub on_delete: String,
    pub match_type: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexMetadata {
    pub name: String,
    pub is_unique: bool,
    pub origin: String,
    pub is_partial: bool,
    /// Key columns in index key order. Expression keys have no column name.
    pub columns: Vec<Option<String>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UniqueConstraintMetadata {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableMetadata {
    pub columns: Vec<ColumnMetadata>,
    pub foreign_keys: Vec<ForeignKeyMetadata>,
    pub indexes: Vec<IndexMetadata>,
    /// Unique constraints are not read from the catalog separately; they show
    /// up as unique indexes, so this stays empty.
    pub unique_constraints: Vec<UniqueConstraintMetadata>,
}

impl TableMetadata {
    pub fn new(
        columns: Vec<ColumnMetadata>,
        foreign_keys: Vec<ForeignKeyMetadata>,
        indexes: Vec<IndexMetadata>,
    ) -> Self {
        Self {
            columns,
            foreign_keys,
            indexes,
            unique_constraints: Vec::new(),
        }
    }

    /// Primary-key column names in column declaration order.
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn foreign_key_constraints(&self) -> Vec<ForeignKeyConstraint> {
        ForeignKeyConstraint::group(&self.foreign_keys)
    }
}
