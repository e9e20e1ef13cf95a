use crate::error::CoreError;
use crate::models::{Course, CourseDraft};
use crate::slug::slug_or_derive;
use crate::store::CourseStore;
use crate::types::DbId;

use super::{
    check_expected_version, concurrent_modification, db_now, title_changed, INITIAL_VERSION,
};

const ENTITY: &str = "Course";

pub struct CourseService<S> {
    store: S,
}

impl<S: CourseStore> CourseService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a course. Titles are unique (case-insensitive) among live
    /// courses.
    pub async fn create(
        &self,
        draft: CourseDraft,
        creator_id: Option<DbId>,
    ) -> Result<Course, CoreError> {
        self.ensure_title_free(&draft.title).await?;

        let now = db_now();
        let course = Course {
            id: DbId::new_v4(),
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            description: draft.description,
            language: draft.language,
            difficulty: draft.difficulty,
            is_published: draft.is_published,
            tags: draft.tags,
            metadata: draft.metadata,
            version: INITIAL_VERSION,
            deleted_at: None,
            created_at: now,
            updated_at: now,
            creator_id,
        };
        self.store.insert(&course).await?;
        Ok(course)
    }

    /// Replace the editable fields of a course.
    ///
    /// `expected_version`, when given, must equal the persisted version.
    pub async fn update(
        &self,
        id: DbId,
        draft: CourseDraft,
        expected_version: Option<i32>,
    ) -> Result<Course, CoreError> {
        let existing = self.get_by_id(id).await?;
        check_expected_version(ENTITY, id, existing.version, expected_version)?;
        if title_changed(&existing.title, &draft.title) {
            self.ensure_title_free(&draft.title).await?;
        }

        let course = Course {
            id,
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            description: draft.description,
            language: draft.language,
            difficulty: draft.difficulty,
            is_published: draft.is_published,
            tags: draft.tags,
            metadata: draft.metadata,
            version: existing.version + 1,
            deleted_at: None,
            created_at: existing.created_at,
            updated_at: db_now(),
            creator_id: existing.creator_id,
        };
        if !self.store.update(&course, existing.version).await? {
            return Err(concurrent_modification(ENTITY, id));
        }
        Ok(course)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.soft_delete(id).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Course, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Course, CoreError> {
        self.store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| CoreError::NotFoundBySlug {
                entity: ENTITY,
                slug: slug.to_string(),
            })
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Course>, CoreError> {
        self.store.list(published_only).await
    }

    async fn ensure_title_free(&self, title: &str) -> Result<(), CoreError> {
        if self.store.exists_by_title(title).await? {
            return Err(CoreError::Conflict(format!(
                "course with title '{title}' already exists"
            )));
        }
        Ok(())
    }
}
