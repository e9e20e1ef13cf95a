use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Room for multipart boundaries and the `path` field on top of the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/media`.
///
/// ```text
/// POST   /              -> upload (multipart: file, path?)
/// GET    /              -> download (?key=)
/// DELETE /              -> delete (?key=)
/// GET    /signed-url    -> signed_url (?key=&expires_in_secs=)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(media::download)
                .post(media::upload)
                .delete(media::delete),
        )
        .route("/signed-url", get(media::signed_url))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
}
