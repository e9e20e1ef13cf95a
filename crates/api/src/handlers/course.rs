//! Handlers for the `/courses` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bandroom_core::types::DbId;

use crate::dto::{CourseListQuery, CourseRequest, CourseResponse};
use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    let course = state
        .courses()
        .create(input.into(), Some(admin.user_id))
        .await?;
    tracing::info!(course_id = %course.id, user_id = %admin.user_id, "Course created");
    Ok((StatusCode::CREATED, Json(course.into())))
}

/// GET /api/courses?published_only=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<CourseListQuery>,
) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.courses().list(query.published_only).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<CourseResponse>> {
    let course = state.courses().get_by_slug(&slug).await?;
    Ok(Json(course.into()))
}

/// GET /api/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<CourseResponse>> {
    let course = state.courses().get_by_id(id).await?;
    Ok(Json(course.into()))
}

/// PUT /api/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    ValidJson(input): ValidJson<CourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    let expected_version = input.version;
    let course = state
        .courses()
        .update(id, input.into(), expected_version)
        .await?;
    tracing::info!(
        course_id = %id,
        version = course.version,
        user_id = %admin.user_id,
        "Course updated"
    );
    Ok(Json(course.into()))
}

/// DELETE /api/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.courses().delete(id).await?;
    tracing::info!(course_id = %id, user_id = %admin.user_id, "Course deleted");
    Ok(StatusCode::NO_CONTENT)
}
