//! Handlers for the `/units` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bandroom_core::types::DbId;

use crate::dto::{UnitListQuery, UnitRequest, UnitResponse};
use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/units
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<UnitRequest>,
) -> AppResult<(StatusCode, Json<UnitResponse>)> {
    let unit = state.units().create(input.into()).await?;
    tracing::info!(
        unit_id = %unit.id,
        course_id = %unit.course_id,
        user_id = %admin.user_id,
        "Unit created"
    );
    Ok((StatusCode::CREATED, Json(unit.into())))
}

/// GET /api/units?course_id=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<UnitListQuery>,
) -> AppResult<Json<Vec<UnitResponse>>> {
    list_for_course(&state, query.course_id).await
}

/// GET /api/units/course/{course_id}
pub async fn list_by_course(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(course_id): AppPath<DbId>,
) -> AppResult<Json<Vec<UnitResponse>>> {
    list_for_course(&state, course_id).await
}

async fn list_for_course(state: &AppState, course_id: DbId) -> AppResult<Json<Vec<UnitResponse>>> {
    let units = state.units().list_by_course(course_id).await?;
    Ok(Json(units.into_iter().map(Into::into).collect()))
}

/// GET /api/units/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UnitResponse>> {
    let unit = state.units().get_by_id(id).await?;
    Ok(Json(unit.into()))
}

/// PUT /api/units/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    ValidJson(input): ValidJson<UnitRequest>,
) -> AppResult<Json<UnitResponse>> {
    let expected_version = input.version;
    let unit = state
        .units()
        .update(id, input.into(), expected_version)
        .await?;
    tracing::info!(unit_id = %id, version = unit.version, user_id = %admin.user_id, "Unit updated");
    Ok(Json(unit.into()))
}

/// DELETE /api/units/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.units().delete(id).await?;
    tracing::info!(unit_id = %id, user_id = %admin.user_id, "Unit deleted");
    Ok(StatusCode::NO_CONTENT)
}
