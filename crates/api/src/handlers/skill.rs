//! Handlers for the `/skills` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bandroom_core::types::DbId;

use crate::dto::{SkillListQuery, SkillRequest, SkillResponse};
use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/skills
///
/// The authenticated admin becomes the skill's creator.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<SkillRequest>,
) -> AppResult<(StatusCode, Json<SkillResponse>)> {
    let skill = state.skills().create(input.into(), admin.user_id).await?;
    tracing::info!(
        skill_id = %skill.id,
        unit_id = %skill.unit_id,
        user_id = %admin.user_id,
        "Skill created"
    );
    Ok((StatusCode::CREATED, Json(skill.into())))
}

/// GET /api/skills?unit_id=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppQuery(query): AppQuery<SkillListQuery>,
) -> AppResult<Json<Vec<SkillResponse>>> {
    let skills = state.skills().list_by_unit(query.unit_id).await?;
    Ok(Json(skills.into_iter().map(Into::into).collect()))
}

/// GET /api/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SkillResponse>> {
    let skill = state.skills().get_by_id(id).await?;
    Ok(Json(skill.into()))
}

/// PUT /api/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    ValidJson(input): ValidJson<SkillRequest>,
) -> AppResult<Json<SkillResponse>> {
    let expected_version = input.version;
    let skill = state
        .skills()
        .update(id, input.into(), expected_version)
        .await?;
    tracing::info!(
        skill_id = %id,
        version = skill.version,
        user_id = %admin.user_id,
        "Skill updated"
    );
    Ok(Json(skill.into()))
}

/// DELETE /api/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.skills().delete(id).await?;
    tracing::info!(skill_id = %id, user_id = %admin.user_id, "Skill deleted");
    Ok(StatusCode::NO_CONTENT)
}
