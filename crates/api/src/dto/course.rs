use bandroom_core::models::{Course, CourseDraft, Difficulty};
use bandroom_core::types::{DbId, Metadata, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[serde(default)]
    pub slug: String,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, max = 32, message = "language must be 1-32 characters"))]
    pub language: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
    /// Version the caller last read; updates fail with 409 if it is stale.
    pub version: Option<i32>,
}

impl From<CourseRequest> for CourseDraft {
    fn from(r: CourseRequest) -> Self {
        CourseDraft {
            slug: r.slug,
            title: r.title,
            description: r.description,
            language: r.language,
            difficulty: r.difficulty,
            is_published: r.is_published,
            tags: r.tags,
            metadata: r.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub is_published: bool,
    pub tags: Vec<String>,
    pub metadata: Metadata,
    pub creator_id: Option<DbId>,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        CourseResponse {
            id: c.id,
            slug: c.slug,
            title: c.title,
            description: c.description,
            language: c.language,
            difficulty: c.difficulty,
            is_published: c.is_published,
            tags: c.tags,
            metadata: c.metadata,
            creator_id: c.creator_id,
            version: c.version,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default)]
    pub published_only: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn minimal_request_fills_defaults() {
        let request: CourseRequest = serde_json::from_value(json!({
            "title": "Intro to Rhythm",
            "language": "en",
            "difficulty": 1,
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.version, None);

        let draft = CourseDraft::from(request);
        assert_eq!(draft.slug, "");
        assert_eq!(draft.difficulty, Difficulty::Beginner);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn blank_title_fails_validation() {
        let request: CourseRequest =
            serde_json::from_value(json!({"title": "", "language": "en"})).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn difficulty_out_of_range_fails_to_parse() {
        let result = serde_json::from_value::<CourseRequest>(json!({
            "title": "Intro",
            "language": "en",
            "difficulty": 7,
        }));
        assert!(result.is_err());
    }
}
