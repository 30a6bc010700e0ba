use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use mediagate_core::models::UploadResponse;
use mediagate_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::UploadService;
use crate::state::AppState;
use crate::validation::ReceivedFile;

/// Multipart form accepted by the upload endpoint; exists for documentation.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
struct UploadForm {
    /// File contents.
    #[schema(value_type = String, format = Binary)]
    file: String,
    /// Target folder; must be on the configured allow-list.
    folder: String,
}

/// Upload handler
///
/// Reads the multipart body (`file` binary field, `folder` category field)
/// and delegates to the upload orchestrator for validation, key derivation,
/// and storage.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(UploadForm), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Validation rejection", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "upload"))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut file: Option<ReceivedFile> = None;
    let mut folder = String::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string).unwrap_or_default();
                let data = field.bytes().await.map_err(bad_multipart)?;
                file = Some(ReceivedFile {
                    data,
                    content_type,
                    filename,
                });
            }
            Some("folder") => {
                folder = field.text().await.map_err(bad_multipart)?;
            }
            _ => {}
        }
    }

    let service = UploadService::new(&state);
    let stored = service.upload(file, &folder).await.map_err(HttpAppError::from)?;

    Ok(Json(UploadResponse::from_stored(&stored)))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> HttpAppError {
    HttpAppError(AppError::BadRequest(format!(
        "Malformed multipart body: {}",
        err
    )))
}
