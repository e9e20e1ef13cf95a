use bandroom_core::models::{Lesson, LessonDraft};
use bandroom_core::types::{DbId, Metadata, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LessonRequest {
    pub skill_id: DbId,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub total_exercises: i32,
    #[serde(default)]
    pub base_xp: i32,
    #[serde(default)]
    pub bonus_xp: i32,
    #[serde(default)]
    pub reward_gems: i32,
    #[serde(default)]
    pub reward_hearts: i32,
    #[serde(default)]
    pub reward_condition: String,
    /// Expected time to finish, in seconds.
    #[serde(default)]
    pub estimated_duration: i32,
    #[serde(default)]
    pub difficulty_rating: f32,
    #[serde(default)]
    pub is_testable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub version: Option<i32>,
}

impl From<LessonRequest> for LessonDraft {
    fn from(r: LessonRequest) -> Self {
        LessonDraft {
            skill_id: r.skill_id,
            slug: r.slug,
            title: r.title,
            description: r.description,
            order_index: r.order_index,
            total_exercises: r.total_exercises,
            base_xp: r.base_xp,
            bonus_xp: r.bonus_xp,
            reward_gems: r.reward_gems,
            reward_hearts: r.reward_hearts,
            reward_condition: r.reward_condition,
            estimated_duration: r.estimated_duration,
            difficulty_rating: r.difficulty_rating,
            is_testable: r.is_testable,
            tags: r.tags,
            metadata: r.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub id: DbId,
    pub skill_id: DbId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub total_exercises: i32,
    pub base_xp: i32,
    pub bonus_xp: i32,
    pub reward_gems: i32,
    pub reward_hearts: i32,
    pub reward_condition: String,
    pub estimated_duration: i32,
    pub difficulty_rating: f32,
    pub is_testable: bool,
    pub creator_id: Option<DbId>,
    pub tags: Vec<String>,
    pub metadata: Metadata,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Lesson> for LessonResponse {
    fn from(l: Lesson) -> Self {
        LessonResponse {
            id: l.id,
            skill_id: l.skill_id,
            slug: l.slug,
            title: l.title,
            description: l.description,
            order_index: l.order_index,
            total_exercises: l.total_exercises,
            base_xp: l.base_xp,
            bonus_xp: l.bonus_xp,
            reward_gems: l.reward_gems,
            reward_hearts: l.reward_hearts,
            reward_condition: l.reward_condition,
            estimated_duration: l.estimated_duration,
            difficulty_rating: l.difficulty_rating,
            is_testable: l.is_testable,
            creator_id: l.creator_id,
            tags: l.tags,
            metadata: l.metadata,
            version: l.version,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LessonListQuery {
    pub skill_id: DbId,
}
