//! One repository per entity, each implementing its gateway trait from
//! `bandroom_core::store` over a shared [`DbPool`](crate::DbPool).
//!
//! Every query ignores soft-deleted rows. Updates are compare-and-swap
//! writes keyed on `(id, version)`.

pub mod course_repo;
pub mod lesson_repo;
pub mod skill_repo;
pub mod unit_repo;

pub use course_repo::CourseRepo;
pub use lesson_repo::LessonRepo;
pub use skill_repo::SkillRepo;
pub use unit_repo::UnitRepo;
