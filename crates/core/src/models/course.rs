//! Course entity and its difficulty scale.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Metadata, Timestamp};

/// Course difficulty, stored and serialized as a small integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Difficulty {
    #[default]
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Difficulty {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for Difficulty {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Advanced),
            other => Err(CoreError::Validation(format!(
                "difficulty must be 1, 2 or 3 (got {other})"
            ))),
        }
    }
}

impl From<Difficulty> for i16 {
    fn from(value: Difficulty) -> Self {
        value.as_i16()
    }
}

/// A course, the root of the curriculum tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub is_published: bool,
    pub tags: Vec<String>,
    pub metadata: Metadata,
    pub version: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub creator_id: Option<DbId>,
}

/// Caller-editable course fields. A blank `slug` is derived from `title`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub is_published: bool,
    pub tags: Vec<String>,
    pub metadata: Metadata,
}
