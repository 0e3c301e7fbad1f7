#[derive(Clone, Debug, Default)]
pub struct DescribeSchemaQuery;

impl DescribeSchemaQuery {
    pub fn new() -> Self {
        Self
    }
}
