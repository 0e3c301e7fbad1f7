#[derive(Clone, Debug, Default)]
pub struct ListTablesQuery;

impl ListTablesQuery {
    pub fn new() -> Self {
        Self
    }
}
