use crate::types::{DbId, Metadata, Timestamp};

/// A skill belongs to a unit and, through it, to a course.
///
/// Both parent ids are stored. `prerequisite_skill_ids` is an unchecked
/// list; duplicates and dangling ids are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
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
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-editable skill fields.
///
/// `course_id` and `unit_id` only apply on create; updates keep the
/// persisted parents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDraft {
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
    pub tags: Vec<String>,
    pub metadata: Metadata,
}
