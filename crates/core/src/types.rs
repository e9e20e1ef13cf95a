/// All primary keys are random (v4) UUIDs.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Free-form JSON object attached to courses, skills and lessons.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
