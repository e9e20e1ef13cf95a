use crate::error::CoreError;
use crate::models::{Skill, SkillDraft};
use crate::slug::slug_or_derive;
use crate::store::SkillStore;
use crate::types::DbId;

use super::{
    check_expected_version, concurrent_modification, db_now, title_changed, INITIAL_VERSION,
};

const ENTITY: &str = "Skill";

pub struct SkillService<S> {
    store: S,
}

impl<S: SkillStore> SkillService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a skill under `draft.course_id` / `draft.unit_id`.
    ///
    /// Fails with `Validation` before touching storage when `creator_id` is
    /// nil, with `Validation` when the unit is missing or belongs to another
    /// course, and with `Conflict` when the course already has a live skill
    /// with the same title (case-insensitive).
    pub async fn create(&self, draft: SkillDraft, creator_id: DbId) -> Result<Skill, CoreError> {
        if creator_id.is_nil() {
            return Err(CoreError::Validation("creator_id must be set".to_string()));
        }
        let owner = self
            .store
            .unit_course_id(draft.unit_id)
            .await?
            .ok_or_else(|| {
                CoreError::Validation(format!("unit {} does not exist", draft.unit_id))
            })?;
        if owner != draft.course_id {
            return Err(CoreError::Validation(format!(
                "unit {} does not belong to course {}",
                draft.unit_id, draft.course_id
            )));
        }
        self.ensure_title_free(draft.course_id, &draft.title).await?;

        let now = db_now();
        let skill = Skill {
            id: DbId::new_v4(),
            course_id: draft.course_id,
            unit_id: draft.unit_id,
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            icon: draft.icon,
            order_index: draft.order_index,
            difficulty: draft.difficulty,
            max_crowns: draft.max_crowns,
            base_xp_reward: draft.base_xp_reward,
            xp_per_crown: draft.xp_per_crown,
            prerequisite_skill_ids: draft.prerequisite_skill_ids,
            creator_id,
            tags: draft.tags,
            metadata: draft.metadata,
            version: INITIAL_VERSION,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&skill).await?;
        Ok(skill)
    }

    /// Replace the editable fields of a skill. Course, unit and creator are
    /// carried over from the stored row.
    pub async fn update(
        &self,
        id: DbId,
        draft: SkillDraft,
        expected_version: Option<i32>,
    ) -> Result<Skill, CoreError> {
        let existing = self.get_by_id(id).await?;
        check_expected_version(ENTITY, id, existing.version, expected_version)?;
        if title_changed(&existing.title, &draft.title) {
            self.ensure_title_free(existing.course_id, &draft.title)
                .await?;
        }

        let skill = Skill {
            id,
            course_id: existing.course_id,
            unit_id: existing.unit_id,
            slug: slug_or_derive(&draft.slug, &draft.title),
            title: draft.title,
            icon: draft.icon,
            order_index: draft.order_index,
            difficulty: draft.difficulty,
            max_crowns: draft.max_crowns,
            base_xp_reward: draft.base_xp_reward,
            xp_per_crown: draft.xp_per_crown,
            prerequisite_skill_ids: draft.prerequisite_skill_ids,
            creator_id: existing.creator_id,
            tags: draft.tags,
            metadata: draft.metadata,
            version: existing.version + 1,
            deleted_at: None,
            created_at: existing.created_at,
            updated_at: db_now(),
        };
        if !self.store.update(&skill, existing.version).await? {
            return Err(concurrent_modification(ENTITY, id));
        }
        Ok(skill)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.soft_delete(id).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Skill, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn list_by_unit(&self, unit_id: DbId) -> Result<Vec<Skill>, CoreError> {
        self.store.list_by_unit(unit_id).await
    }

    async fn ensure_title_free(&self, course_id: DbId, title: &str) -> Result<(), CoreError> {
        if self.store.exists_by_title_in_course(course_id, title).await? {
            return Err(CoreError::Conflict(format!(
                "skill with title '{title}' already exists in this course"
            )));
        }
        Ok(())
    }
}
