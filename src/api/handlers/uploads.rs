use crate::AppState;
use crate::api::error::AppError;
use crate::utils::validation::{DEFAULT_EXTENSION, extension_of, is_safe_segment};
use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tokio_util::io::ReaderStream;
use tracing::info;
use uuid::Uuid;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// POST /api/upload-design
///
/// Accepts a multipart body whose `designImage` field holds the file. The
/// file is stored under a fresh UUID name so concurrent uploads of files
/// with identical original names can never collide.
pub async fn upload_design(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("designImage") {
            continue;
        }

        let original_filename = field.file_name().unwrap_or_default().to_string();
        if original_filename.is_empty() {
            return Err(AppError::BadRequest("No file was selected.".to_string()));
        }

        let ext =
            extension_of(&original_filename).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        state.storage.save(&stored_name, &bytes).await?;

        info!("⬆️  {} stored as {}", original_filename, stored_name);

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            image_url: state.config.public_url_for(&stored_name),
        }));
    }

    Err(AppError::BadRequest(
        "No 'designImage' file field in the request.".to_string(),
    ))
}

/// GET /uploads/:filename
///
/// Streams a stored file back with a content type inferred from its
/// extension. Unknown names, and anything that is not a plain filename,
/// produce a bare 404.
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !is_safe_segment(&filename) {
        return Err(AppError::NotFound);
    }

    let file = state.storage.open(&filename).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound
        } else {
            AppError::Storage(e)
        }
    })?;

    let content_type = mime_guess::from_path(&filename).first_or_octet_stream();
    let body = Body::from_stream(ReaderStream::new(file));

    Ok((
        [(header::CONTENT_TYPE, content_type.to_string())],
        body,
    )
        .into_response())
}
