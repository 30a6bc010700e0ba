use std::sync::Arc;

use axum::{extract::State, Json};
use mediagate_core::models::{DeleteRequest, DeleteResponse};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::DeleteService;
use crate::state::AppState;

/// Delete handler
///
/// Takes the URL issued by a previous upload and delegates to the delete
/// orchestrator, which verifies the URL belongs to the configured store
/// before touching it.
#[utoipa::path(
    post,
    path = "/api/delete",
    tag = "upload",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Object deleted (or already absent)", body = DeleteResponse),
        (status = 400, description = "Missing or malformed URL", body = ErrorResponse),
        (status = 403, description = "URL does not belong to the configured store", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "delete"))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteRequest>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    let service = DeleteService::new(&state);
    let response = service
        .delete(&request.url)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(response))
}
