use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::error;

use crate::schema_metadata::{
    domain::{
        model::{
            enums::schema_metadata_domain_error::SchemaMetadataDomainError,
            queries::{
                describe_schema_query::DescribeSchemaQuery,
                describe_table_query::DescribeTableQuery,
                list_foreign_key_constraints_query::ListForeignKeyConstraintsQuery,
                list_tables_query::ListTablesQuery,
            },
        },
        services::schema_metadata_query_service::SchemaMetadataQueryService,
    },
    interfaces::rest::resources::{
        error_response_resource::ErrorResponseResource,
        foreign_key_constraint_resource::ForeignKeyConstraintResource,
        schema_snapshot_resource::SchemaSnapshotResource,
        table_metadata_resource::TableMetadataResource,
    },
};

#[derive(Clone)]
pub struct SchemaMetadataRestControllerState {
    pub query_service: Arc<dyn SchemaMetadataQueryService>,
}

pub fn router(state: SchemaMetadataRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/tables", get(list_tables))
        .route("/api/v1/metadata", get(describe_schema))
        .route("/api/v1/tables/:table_name", get(describe_table))
        .route(
            "/api/v1/tables/:table_name/foreign-keys",
            get(list_foreign_key_constraints),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/tables",
    tag = "metadata",
    responses(
        (status = 200, description = "User table names in catalog order", body = [String]),
        (status = 500, description = "Database failure", body = ErrorResponseResource)
    )
)]
pub async fn list_tables(
    State(state): State<SchemaMetadataRestControllerState>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorResponseResource>)> {
    let table_names = state
        .query_service
        .handle_list_tables(ListTablesQuery::new())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(table_names))
}

#[utoipa::path(
    get,
    path = "/api/v1/metadata",
    tag = "metadata",
    responses(
        (status = 200, description = "Metadata for every user table", body = SchemaSnapshotResource),
        (status = 500, description = "Database failure", body = ErrorResponseResource)
    )
)]
pub async fn describe_schema(
    State(state): State<SchemaMetadataRestControllerState>,
) -> Result<Json<SchemaSnapshotResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let snapshot = state
        .query_service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(snapshot.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/tables/{table_name}",
    tag = "metadata",
    params(
        ("table_name" = String, Path, description = "User table name")
    ),
    responses(
        (status = 200, description = "Metadata for one table", body = TableMetadataResource),
        (status = 400, description = "Invalid table name", body = ErrorResponseResource),
        (status = 404, description = "Table not found", body = ErrorResponseResource),
        (status = 500, description = "Database failure", body = ErrorResponseResource)
    )
)]
pub async fn describe_table(
    State(state): State<SchemaMetadataRestControllerState>,
    Path(table_name): Path<String>,
) -> Result<Json<TableMetadataResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = DescribeTableQuery::new(table_name).map_err(map_domain_error)?;

    let metadata = state
        .query_service
        .handle_describe_table(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(metadata.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/tables/{table_name}/foreign-keys",
    tag = "metadata",
    params(
        ("table_name" = String, Path, description = "User table name")
    ),
    responses(
        (status = 200, description = "Foreign keys grouped by constraint", body = [ForeignKeyConstraintResource]),
        (status = 400, description = "Invalid table name", body = ErrorResponseResource),
        (status = 404, description = "Table not found", body = ErrorResponseResource),
        (status = 500, description = "Database failure", body = ErrorResponseResource)
    )
)]
pub async fn list_foreign_key_constraints(
    State(state): State<SchemaMetadataRestControllerState>,
    Path(table_name): Path<String>,
) -> Result<Json<Vec<ForeignKeyConstraintResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = ListForeignKeyConstraintsQuery::new(table_name).map_err(map_domain_error)?;

    let constraints = state
        .query_service
        .handle_list_foreign_key_constraints(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(constraints.into_iter().map(Into::into).collect()))
}

fn map_domain_error(error: SchemaMetadataDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        SchemaMetadataDomainError::InvalidTableName => StatusCode::BAD_REQUEST,
        SchemaMetadataDomainError::TableNotFound(_) => StatusCode::NOT_FOUND,
        SchemaMetadataDomainError::DatabaseError(_)
        | SchemaMetadataDomainError::UnexpectedError(_) => {
            error!(%error, "metadata request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponseResource {
            detail: error.to_string(),
        }),
    )
}
