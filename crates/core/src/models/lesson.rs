use crate::types::{DbId, Metadata, Timestamp};

/// A lesson is the smallest playable piece of a skill.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
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
    /// Expected time to finish, in seconds.
    pub estimated_duration: i32,
    pub difficulty_rating: f32,
    pub is_testable: bool,
    pub creator_id: Option<DbId>,
    pub tags: Vec<String>,
    pub metadata: Metadata,
    pub version: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-editable lesson fields. `skill_id` only applies on create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonDraft {
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
    pub tags: Vec<String>,
    pub metadata: Metadata,
}
