//! Persistence gateway contracts, one per entity.
//!
//! Gateways map records to storage and back without applying business rules.
//! Every read ignores soft-deleted rows. Errors come back as typed
//! [`CoreError`] values so services can propagate them unchanged.

use std::future::Future;

use crate::error::CoreError;
use crate::models::{Course, Lesson, Skill, Unit};
use crate::types::DbId;

/// Storage for [`Course`] records.
pub trait CourseStore: Send + Sync {
    fn insert(&self, course: &Course) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Replace the stored row if its version still equals `expected_version`.
    ///
    /// Returns `false` when no live row with that id and version exists.
    fn update(
        &self,
        course: &Course,
        expected_version: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Mark the row deleted. Missing or already-deleted ids are not an error.
    fn soft_delete(&self, id: DbId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn find_by_id(&self, id: DbId)
        -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn find_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    /// List courses, optionally only the published ones.
    fn list(
        &self,
        published_only: bool,
    ) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    /// Case-insensitive title lookup across all live courses.
    fn exists_by_title(&self, title: &str)
        -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Storage for [`Unit`] records.
pub trait UnitStore: Send + Sync {
    fn insert(&self, unit: &Unit) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update(
        &self,
        unit: &Unit,
        expected_version: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn soft_delete(&self, id: DbId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn find_by_id(&self, id: DbId) -> impl Future<Output = Result<Option<Unit>, CoreError>> + Send;

    /// Units of a course ordered by `order_index` ascending.
    fn list_by_course(
        &self,
        course_id: DbId,
    ) -> impl Future<Output = Result<Vec<Unit>, CoreError>> + Send;
}

/// Storage for [`Skill`] records.
pub trait SkillStore: Send + Sync {
    fn insert(&self, skill: &Skill) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update(
        &self,
        skill: &Skill,
        expected_version: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn soft_delete(&self, id: DbId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn find_by_id(&self, id: DbId)
        -> impl Future<Output = Result<Option<Skill>, CoreError>> + Send;

    /// Skills of a unit ordered by `order_index` ascending.
    fn list_by_unit(
        &self,
        unit_id: DbId,
    ) -> impl Future<Output = Result<Vec<Skill>, CoreError>> + Send;

    /// Course owning the live unit `unit_id`, or `None` when there is no such
    /// unit.
    fn unit_course_id(
        &self,
        unit_id: DbId,
    ) -> impl Future<Output = Result<Option<DbId>, CoreError>> + Send;

    /// Case-insensitive title lookup among the live skills of `course_id`.
    fn exists_by_title_in_course(
        &self,
        course_id: DbId,
        title: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Storage for [`Lesson`] records.
pub trait LessonStore: Send + Sync {
    fn insert(&self, lesson: &Lesson) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update(
        &self,
        lesson: &Lesson,
        expected_version: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn soft_delete(&self, id: DbId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn find_by_id(&self, id: DbId)
        -> impl Future<Output = Result<Option<Lesson>, CoreError>> + Send;

    /// Lessons of a skill ordered by `order_index` ascending.
    fn list_by_skill(
        &self,
        skill_id: DbId,
    ) -> impl Future<Output = Result<Vec<Lesson>, CoreError>> + Send;

    /// Case-insensitive title lookup among the live lessons of `skill_id`.
    fn exists_by_title_in_skill(
        &self,
        skill_id: DbId,
        title: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
