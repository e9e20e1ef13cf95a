//! Handlers for the `/media` object-storage routes.
//!
//! Every handler answers 503 while object storage is disabled.

use std::time::Duration;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{MediaKeyQuery, MediaUploadResponse, SignedUrlQuery, SignedUrlResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Prefix for keys generated when the upload does not name one.
const GENERATED_KEY_PREFIX: &str = "uploads";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

struct UploadedFile {
    file_name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/media
///
/// Accepts a multipart form with a required `file` field and an optional
/// `path` field naming the object key. Without `path` the key is
/// `uploads/<uuid>-<file name>`.
pub async fn upload(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<MediaUploadResponse>)> {
    let store = state.object_store()?;

    let mut file: Option<UploadedFile> = None;
    let mut path: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: data.to_vec(),
                });
            }
            "path" => {
                let text = field.text().await.map_err(multipart_error)?;
                path = Some(text.trim().to_string()).filter(|p| !p.is_empty());
            }
            _ => {} // ignore unknown fields
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if file.bytes.len() > state.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "file is {} bytes; the limit is {}",
            file.bytes.len(),
            state.max_upload_bytes
        )));
    }

    let key = path.unwrap_or_else(|| generated_key(file.file_name.as_deref()));
    let size = file.bytes.len();
    let url = store.upload(&key, file.bytes, &file.content_type).await?;

    tracing::info!(
        key = %key,
        size,
        content_type = %file.content_type,
        user_id = %admin.user_id,
        "Media uploaded",
    );
    Ok((StatusCode::CREATED, Json(MediaUploadResponse { key, url })))
}

/// GET /api/media?key=
pub async fn download(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<MediaKeyQuery>,
) -> AppResult<Response> {
    let object = state.object_store()?.download(&query.key).await?;
    let content_type = object
        .content_type
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
    Ok(([(CONTENT_TYPE, content_type)], object.bytes).into_response())
}

/// DELETE /api/media?key=
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppQuery(query): AppQuery<MediaKeyQuery>,
) -> AppResult<StatusCode> {
    state.object_store()?.delete(&query.key).await?;
    tracing::info!(key = %query.key, user_id = %admin.user_id, "Media deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/media/signed-url?key=&expires_in_secs=
pub async fn signed_url(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<SignedUrlQuery>,
) -> AppResult<Json<SignedUrlResponse>> {
    let store = state.object_store()?;
    query.validate()?;
    let url = store
        .signed_url(&query.key, Duration::from_secs(query.expires_in_secs))
        .await?;
    Ok(Json(SignedUrlResponse {
        url,
        expires_in_secs: query.expires_in_secs,
    }))
}

/// Oversized bodies surface as multipart read errors carrying a 413 status.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// Object key for an upload that did not name one.
fn generated_key(file_name: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match file_name.map(sanitize_file_name).filter(|n| !n.is_empty()) {
        Some(name) => format!("{GENERATED_KEY_PREFIX}/{id}-{name}"),
        None => format!("{GENERATED_KEY_PREFIX}/{id}"),
    }
}

/// Keep the last path component and replace anything outside
/// `[A-Za-z0-9._-]` with `_`.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_directories_and_odd_characters() {
        assert_eq!(sanitize_file_name("C:\\music\\drum loop.wav"), "drum_loop.wav");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("ok-name_1.mp3"), "ok-name_1.mp3");
    }

    #[test]
    fn generated_keys_live_under_the_upload_prefix() {
        let key = generated_key(Some("beat.mp3"));
        assert!(key.starts_with("uploads/"));
        assert!(key.ends_with("-beat.mp3"));

        let bare = generated_key(None);
        let id = bare.strip_prefix("uploads/").unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
