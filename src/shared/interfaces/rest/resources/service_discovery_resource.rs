use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceDiscoveryResource {
    pub message: String,
    pub docs_url: String,
    pub tables_endpoint: String,
    pub metadata_endpoint: String,
}
