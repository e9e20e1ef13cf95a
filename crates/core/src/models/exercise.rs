//! Exercise family.
//!
//! These records describe the learner-facing tasks inside a lesson. They are
//! not persisted or served by this backend yet; the types fix the JSON shape
//! shared with the player client.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Metadata, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    MultipleChoice,
    AudioRecognition,
    Playback,
    FillInTheBlank,
    Matching,
    Typing,
}

/// Interaction format of a [`ExerciseType::Matching`] exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingType {
    TextToText,
    ImageToText,
    AudioToText,
    TextToAudio,
    ImageToImage,
    AudioToAudio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: DbId,
    pub skill_id: DbId,
    pub lesson_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Only set for matching exercises.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_type: Option<MatchingType>,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub order_index: i32,
    pub points: i32,
    /// Music theory grade level, 1 through 5.
    pub grade: i32,
    /// Exam board, e.g. "ABRSM".
    pub syllabus: String,
    #[serde(rename = "objective")]
    pub objective_tag: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// A selectable choice of a multiple-choice or matching exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOption {
    pub id: DbId,
    pub exercise_id: DbId,
    pub label: String,
    pub value: String,
    pub is_correct: bool,
    pub media_url: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A learner's submitted response to an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAnswer {
    pub id: DbId,
    pub user_id: DbId,
    pub exercise_id: DbId,
    /// Lesson or skill attempt this answer belongs to.
    pub attempt_id: DbId,
    pub response: Metadata,
    pub is_correct: bool,
    pub submitted_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_types_use_snake_case_names() {
        assert_eq!(
            serde_json::to_value(ExerciseType::FillInTheBlank).unwrap(),
            "fill_in_the_blank"
        );
        assert_eq!(
            serde_json::to_value(MatchingType::AudioToAudio).unwrap(),
            "audio_to_audio"
        );
    }

    #[test]
    fn exercise_type_field_is_named_type() {
        let json = serde_json::json!({
            "id": DbId::nil(),
            "skill_id": DbId::nil(),
            "lesson_id": DbId::nil(),
            "title": "Name the interval",
            "type": "matching",
            "matching_type": "audio_to_text",
            "prompt": "Match each sound to its interval",
            "order_index": 0,
            "points": 10,
            "grade": 2,
            "syllabus": "ABRSM",
            "objective": "intervals",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        let exercise: Exercise = serde_json::from_value(json).unwrap();
        assert_eq!(exercise.exercise_type, ExerciseType::Matching);
        assert_eq!(exercise.matching_type, Some(MatchingType::AudioToText));
        assert!(exercise.media_url.is_none());

        let back = serde_json::to_value(&exercise).unwrap();
        assert_eq!(back["type"], "matching");
        assert!(back.get("deleted_at").is_none());
    }
}
