use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Value of `APP_ENV`.
    pub environment: &'static str,
    pub db_healthy: bool,
    /// Whether the `/api/media` routes have an object store behind them.
    pub storage_enabled: bool,
}

/// GET /health
///
/// Unauthenticated. Disabled storage is reported but does not degrade the
/// status, since media is optional.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match bandroom_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.app_env.as_str(),
        db_healthy,
        storage_enabled: state.object_store.is_some(),
    })
}

/// Mounted at the root, outside the admin-gated `/api` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
