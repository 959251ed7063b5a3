//! Image upload endpoint for the admin console.
//!
//! Accepts a multipart form with a `file` field and a `folder` field, checks
//! the extension and size, decodes the image header for its dimensions, and
//! writes it under the configured upload directory.

use std::io::Cursor;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::uploads::{stored_file_path, validate_image_upload, UploadFolder};
use image::{ImageFormat, ImageReader};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stored upload, as returned to the console.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Path relative to the upload directory, e.g. `kits/<uuid>.png`.
    pub path: String,
    /// Public URL to put into an entity's `image_url`.
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

/// POST /api/v1/admin/uploads
pub async fn upload_image(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut folder: Option<UploadFolder> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "folder" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                folder = Some(text.parse()?);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let folder =
        folder.ok_or_else(|| AppError::BadRequest("Missing required 'folder' field".into()))?;

    let ext = validate_image_upload(&filename, data.len())?;
    let (detected_ext, width, height) = inspect_image(&data)?;
    if detected_ext != ext {
        return Err(AppError::Core(CoreError::Validation(format!(
            "File '{filename}' contains {detected_ext} image data, not {ext}"
        ))));
    }

    let relative = stored_file_path(folder, &ext, Uuid::new_v4());
    let dest = state.config.upload_dir.join(&relative);
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }
    tokio::fs::write(&dest, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(
        path = %relative,
        size_bytes = data.len(),
        width,
        height,
        user_id = user.user_id,
        "Image uploaded"
    );

    let url = format!("{}/{relative}", state.config.upload_base_url);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse {
                path: relative,
                url,
                width,
                height,
                size_bytes: data.len(),
            },
        }),
    ))
}

/// Sniff the image format from its magic bytes and read width and height
/// from the header without decoding pixels. Returns the storage extension
/// for the detected format.
fn inspect_image(data: &[u8]) -> AppResult<(&'static str, u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let ext = match reader.format() {
        Some(ImageFormat::Png) => "png",
        Some(ImageFormat::Jpeg) => "jpg",
        Some(ImageFormat::WebP) => "webp",
        _ => return Err(unreadable_image()),
    };
    let (width, height) = reader.into_dimensions().map_err(|_| unreadable_image())?;
    Ok((ext, width, height))
}

fn unreadable_image() -> AppError {
    AppError::Core(CoreError::Validation(
        "Uploaded file is not a readable image".into(),
    ))
}
