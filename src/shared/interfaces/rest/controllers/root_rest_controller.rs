use axum::{Json, Router, routing::get};

use crate::shared::interfaces::rest::resources::service_discovery_resource::ServiceDiscoveryResource;

pub const SERVICE_NAME: &str = "Database Metadata API";

pub fn router() -> Router {
    Router::new().route("/", get(discover_service))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "discovery",
    responses(
        (status = 200, description = "Service name and endpoint paths", body = ServiceDiscoveryResource)
    )
)]
pub async fn discover_service() -> Json<ServiceDiscoveryResource> {
    Json(ServiceDiscoveryResource {
        message: SERVICE_NAME.to_string(),
        docs_url: "/docs".to_string(),
        tables_endpoint: "/api/v1/tables".to_string(),
        metadata_endpoint: "/api/v1/metadata".to_string(),
    })
}
