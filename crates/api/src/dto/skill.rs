use bandroom_core::models::{Skill, SkillDraft};
use bandroom_core::types::{DbId, Metadata, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Icon used when the request leaves it blank.
pub const DEFAULT_SKILL_ICON: &str = "🎯";

#[derive(Debug, Deserialize, Validate)]
pub struct SkillRequest {
    pub course_id: DbId,
    pub unit_id: DbId,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub difficulty: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "max_crowns must not be negative"))]
    pub max_crowns: i32,
    #[serde(default)]
    pub base_xp_reward: i32,
    #[serde(default)]
    pub xp_per_crown: i32,
    #[serde(default)]
    pub prerequisite_skill_ids: Vec<DbId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub version: Option<i32>,
}

impl From<SkillRequest> for SkillDraft {
    fn from(r: SkillRequest) -> Self {
        let icon = if r.icon.trim().is_empty() {
            DEFAULT_SKILL_ICON.to_string()
        } else {
            r.icon
        };
        SkillDraft {
            course_id: r.course_id,
            unit_id: r.unit_id,
            title: r.title,
            slug: r.slug,
            icon,
            order_index: r.order_index,
            difficulty: r.difficulty,
            max_crowns: r.max_crowns,
            base_xp_reward: r.base_xp_reward,
            xp_per_crown: r.xp_per_crown,
            prerequisite_skill_ids: r.prerequisite_skill_ids,
            tags: r.tags,
            metadata: r.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: DbId,
    pub course_id: DbId,
    pub unit_id: DbId,
    pub title: String,
    pub slug: String,
    pub icon: String,
    pub order_index: i32,
    pub difficulty: i32,
    pub max_crowns: i32,
    pub base_xp_reward: i32,
    pub xp_per_crown: i32,
    pub prerequisite_skill_ids: Vec<DbId>,
    pub creator_id: DbId,
    pub tags: Vec<String>,
    pub metadata: Metadata,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        SkillResponse {
            id: s.id,
            course_id: s.course_id,
            unit_id: s.unit_id,
            title: s.title,
            slug: s.slug,
            icon: s.icon,
            order_index: s.order_index,
            difficulty: s.difficulty,
            max_crowns: s.max_crowns,
            base_xp_reward: s.base_xp_reward,
            xp_per_crown: s.xp_per_crown,
            prerequisite_skill_ids: s.prerequisite_skill_ids,
            creator_id: s.creator_id,
            tags: s.tags,
            metadata: s.metadata,
            version: s.version,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    pub unit_id: DbId,
}
