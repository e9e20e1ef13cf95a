//! Handlers for the `/lessons` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bandroom_core::types::DbId;

use crate::dto::{LessonListQuery, LessonRequest, LessonResponse};
use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/lessons
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<LessonRequest>,
) -> AppResult<(StatusCode, Json<LessonResponse>)> {
    let lesson = state
        .lessons()
        .create(input.into(), Some(admin.user_id))
        .await?;
    tracing::info!(
        lesson_id = %lesson.id,
        skill_id = %lesson.skill_id,
        user_id = %admin.user_id,
        "Lesson created"
    );
    Ok((StatusCode::CREATED, Json(lesson.into())))
}

/// GET /api/lessons?skill_id=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<LessonListQuery>,
) -> AppResult<Json<Vec<LessonResponse>>> {
    let lessons = state.lessons().list_by_skill(query.skill_id).await?;
    Ok(Json(lessons.into_iter().map(Into::into).collect()))
}

/// GET /api/lessons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<LessonResponse>> {
    let lesson = state.lessons().get_by_id(id).await?;
    Ok(Json(lesson.into()))
}

/// PUT /api/lessons/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    ValidJson(input): ValidJson<LessonRequest>,
) -> AppResult<Json<LessonResponse>> {
    let expected_version = input.version;
    let lesson = state
        .lessons()
        .update(id, input.into(), expected_version)
        .await?;
    tracing::info!(
        lesson_id = %id,
        version = lesson.version,
        user_id = %admin.user_id,
        "Lesson updated"
    );
    Ok(Json(lesson.into()))
}

/// DELETE /api/lessons/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.lessons().delete(id).await?;
    tracing::info!(lesson_id = %id, user_id = %admin.user_id, "Lesson deleted");
    Ok(StatusCode::NO_CONTENT)
}
