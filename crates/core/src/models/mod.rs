//! Curriculum entity records.
//!
//! The hierarchy is course → unit → skill → lesson. Children hold their
//! parent's id as a plain foreign-key value; there are no back-reference
//! collections.
//!
//! Each entity comes with a `*Draft` struct carrying the caller-editable
//! fields. Services turn drafts into full records, filling in identity,
//! timestamps, slug and version.

pub mod course;
pub mod exercise;
pub mod lesson;
pub mod skill;
pub mod unit;

pub use course::{Course, CourseDraft, Difficulty};
pub use lesson::{Lesson, LessonDraft};
pub use skill::{Skill, SkillDraft};
pub use unit::{Unit, UnitDraft};
