//! Request and response bodies for the HTTP surface.
//!
//! Requests deserialize into typed fields (UUIDs included, so a malformed id
//! is rejected before any handler runs) and convert into the domain drafts.
//! Responses are built from the domain records by plain field mapping.

pub mod course;
pub mod lesson;
pub mod media;
pub mod skill;
pub mod unit;

pub use course::{CourseListQuery, CourseRequest, CourseResponse};
pub use lesson::{LessonListQuery, LessonRequest, LessonResponse};
pub use media::{MediaKeyQuery, MediaUploadResponse, SignedUrlQuery, SignedUrlResponse};
pub use skill::{SkillListQuery, SkillRequest, SkillResponse};
pub use unit::{UnitListQuery, UnitRequest, UnitResponse};
