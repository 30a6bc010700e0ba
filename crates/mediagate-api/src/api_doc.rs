//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediagate_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediagate API",
        version = "0.1.0",
        description = "Media ingestion gateway: validated uploads into an object store and deletion of previously issued URLs."
    ),
    paths(
        handlers::upload::upload,
        handlers::delete::delete,
    ),
    components(schemas(
        models::UploadResponse,
        models::DeleteRequest,
        models::DeleteResponse,
        error::ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Serve the OpenAPI spec as JSON.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
