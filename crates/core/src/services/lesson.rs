use crate::error::CoreError;
use crate::models::{Lesson, LessonDraft};
use crate::slug::slug_or_derive;
use crate::store::LessonStore;
use crate::types::DbId;

use super::{
    check_expected_version, concurrent_modification, db_now, title_changed, INITIAL_VERSION,
};

const ENTITY: &str = "Lesson";

pub struct LessonService<S> {
    store: S,
}

impl<S: LessonStore> LessonService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a lesson under `draft.skill_id`. Titles are unique
    /// (case-insensitive) among the live lessons of one skill.
    pub async fn create(
        &self,
        draft: LessonDraft,
        creator_id: Option<DbId>,
    ) -> Result<Lesson, CoreError> {
        self.ensure_title_free(draft.skill_id, &draft.title).await?;

        let now = db_now();
        let lesson = Lesson {
            id: DbId::new_v4(),
            skill_id: draft.skill_id,
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            description: draft.description,
            order_index: draft.order_index,
            total_exercises: draft.total_exercises,
            base_xp: draft.base_xp,
            bonus_xp: draft.bonus_xp,
            reward_gems: draft.reward_gems,
            reward_hearts: draft.reward_hearts,
            reward_condition: draft.reward_condition,
            estimated_duration: draft.estimated_duration,
            difficulty_rating: draft.difficulty_rating,
            is_testable: draft.is_testable,
            creator_id,
            tags: draft.tags,
            metadata: draft.metadata,
            version: INITIAL_VERSION,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&lesson).await?;
        Ok(lesson)
    }

    pub async fn update(
        &self,
        id: DbId,
        draft: LessonDraft,
        expected_version: Option<i32>,
    ) -> Result<Lesson, CoreError> {
        let existing = self.get_by_id(id).await?;
        check_expected_version(ENTITY, id, existing.version, expected_version)?;
        if title_changed(&existing.title, &draft.title) {
            self.ensure_title_free(existing.skill_id, &draft.title)
                .await?;
        }

        let lesson = Lesson {
            id,
            skill_id: existing.skill_id,
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            description: draft.description,
            order_index: draft.order_index,
            total_exercises: draft.total_exercises,
            base_xp: draft.base_xp,
            bonus_xp: draft.bonus_xp,
            reward_gems: draft.reward_gems,
            reward_hearts: draft.reward_hearts,
            reward_condition: draft.reward_condition,
            estimated_duration: draft.estimated_duration,
            difficulty_rating: draft.difficulty_rating,
            is_testable: draft.is_testable,
            creator_id: existing.creator_id,
            tags: draft.tags,
            metadata: draft.metadata,
            version: existing.version + 1,
            deleted_at: None,
            created_at: existing.created_at,
            updated_at: db_now(),
        };
        if !self.store.update(&lesson, existing.version).await? {
            return Err(concurrent_modification(ENTITY, id));
        }
        Ok(lesson)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.soft_delete(id).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Lesson, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn list_by_skill(&self, skill_id: DbId) -> Result<Vec<Lesson>, CoreError> {
        self.store.list_by_skill(skill_id).await
    }

    async fn ensure_title_free(&self, skill_id: DbId, title: &str) -> Result<(), CoreError> {
        if self.store.exists_by_title_in_skill(skill_id, title).await? {
            return Err(CoreError::Conflict(format!(
                "lesson with title '{title}' already exists in this skill"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::services::test_helpers::MemoryStore;

    fn draft(skill_id: DbId, title: &str) -> LessonDraft {
        LessonDraft {
            skill_id,
            title: title.to_string(),
            total_exercises: 10,
            base_xp: 10,
            difficulty_rating: 1.5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn duplicate_title_in_same_skill_is_a_conflict() {
        let store = MemoryStore::new();
        let service = LessonService::new(store.clone());
        let skill_id = DbId::new_v4();
        service.create(draft(skill_id, "Clap the Beat"), None).await.unwrap();

        let result = service.create(draft(skill_id, "clap the beat"), None).await;

        assert_matches!(result, Err(CoreError::Conflict(_)));
        assert_eq!(store.inserts(), 1);
    }

    #[tokio::test]
    async fn same_title_in_another_skill_is_fine() {
        let service = LessonService::new(MemoryStore::new());
        service
            .create(draft(DbId::new_v4(), "Clap the Beat"), None)
            .await
            .unwrap();

        let lesson = service
            .create(draft(DbId::new_v4(), "Clap the Beat"), None)
            .await
            .unwrap();
        assert_eq!(lesson.slug, "clap-the-beat");
    }

    #[tokio::test]
    async fn deleting_an_unknown_lesson_succeeds() {
        let service = LessonService::new(MemoryStore::new());
        service.delete(DbId::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn update_keeps_skill_and_creator() {
        let service = LessonService::new(MemoryStore::new());
        let skill_id = DbId::new_v4();
        let creator = DbId::new_v4();
        let created = service
            .create(draft(skill_id, "Clap the Beat"), Some(creator))
            .await
            .unwrap();

        let mut edit = draft(DbId::new_v4(), "Clap the Beat");
        edit.slug = "clap-along".to_string();
        edit.is_testable = true;
        let updated = service.update(created.id, edit, Some(1)).await.unwrap();

        assert_eq!(updated.skill_id, skill_id);
        assert_eq!(updated.creator_id, Some(creator));
        assert_eq!(updated.slug, "clap-along");
        assert!(updated.is_testable);
        assert_eq!(updated.version, 2);
    }

    #[tokio::test]
    async fn list_orders_lessons_within_a_skill() {
        let service = LessonService::new(MemoryStore::new());
        let skill_id = DbId::new_v4();
        let mut second = draft(skill_id, "Second");
        second.order_index = 2;
        let mut first = draft(skill_id, "First");
        first.order_index = 1;
        service.create(second, None).await.unwrap();
        service.create(first, None).await.unwrap();

        let lessons = service.list_by_skill(skill_id).await.unwrap();
        assert_eq!(lessons[0].title, "First");
        assert_eq!(lessons[1].title, "Second");
    }
}
