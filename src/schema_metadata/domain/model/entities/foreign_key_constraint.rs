use indexmap::IndexMap;

use crate::schema_metadata::domain::model::entities::table_metadata::ForeignKeyMetadata;

/// A foreign key with all of its columns, built from the per-column rows
/// that share one constraint id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignKeyConstraint {
    pub id: i64,
    pub referenced_table: String,
    pub local_columns: Vec<String>,
    pub referenced_columns: Vec<Option<String>>,
    pub on_update: String,
    pub on_delete: String,
    pub match_type: String,
}

impl ForeignKeyConstraint {
    /// Groups rows by constraint id in first-seen order; columns inside a
    /// constraint follow their sequence number.
    pub fn group(rows: &[ForeignKeyMetadata]) -> Vec<Self> {
        let mut grouped: IndexMap<i64, Vec<&ForeignKeyMetadata>> = IndexMap::new();
        for row in rows {
            grouped.entry(row.id).or_default().push(row);
        }

        grouped
            .into_iter()
            .map(|(id, mut members)| {
                members.sort_by_key(|row| row.seq);
                let first = members[0];

                Self {
                    id,
                    referenced_table: first.referenced_table.clone(),
                    local_columns: members.iter().map(|r| r.local_column.clone()).collect(),
                    referenced_columns: members
                        .iter()
                        .map(|r| r.referenced_column.clone())
                        .collect(),
                    on_update: first.on_update.clone(),
                    on_delete: first.on_delete.clone(),
                    match_type: first.match_type.clone(),
                }
            })
            .collect()
    }
}
