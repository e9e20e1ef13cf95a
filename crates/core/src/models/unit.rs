use crate::types::{DbId, Timestamp};

/// A unit groups skills inside a course.
///
/// `order_index` is caller-supplied and not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub version: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-editable unit fields. `course_id` only applies on create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitDraft {
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub order_index: i32,
}
