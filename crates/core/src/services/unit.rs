use crate::error::CoreError;
use crate::models::{Unit, UnitDraft};
use crate::store::UnitStore;
use crate::types::DbId;

use super::{check_expected_version, concurrent_modification, db_now, INITIAL_VERSION};

const ENTITY: &str = "Unit";

/// Units have no slug and no title uniqueness rule.
pub struct UnitService<S> {
    store: S,
}

impl<S: UnitStore> UnitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(&self, draft: UnitDraft) -> Result<Unit, CoreError> {
        let now = db_now();
        let unit = Unit {
            id: DbId::new_v4(),
            course_id: draft.course_id,
            title: draft.title,
            description: draft.description,
            order_index: draft.order_index,
            version: INITIAL_VERSION,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&unit).await?;
        Ok(unit)
    }

    /// Replace title, description and order. The owning course never changes.
    pub async fn update(
        &self,
        id: DbId,
        draft: UnitDraft,
        expected_version: Option<i32>,
    ) -> Result<Unit, CoreError> {
        let existing = self.get_by_id(id).await?;
        check_expected_version(ENTITY, id, existing.version, expected_version)?;

        let unit = Unit {
            id,
            course_id: existing.course_id,
            title: draft.title,
            description: draft.description,
            order_index: draft.order_index,
            version: existing.version + 1,
            deleted_at: None,
            created_at: existing.created_at,
            updated_at: db_now(),
        };
        if !self.store.update(&unit, existing.version).await? {
            return Err(concurrent_modification(ENTITY, id));
        }
        Ok(unit)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.soft_delete(id).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Unit, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Units of `course_id` in `order_index` order.
    pub async fn list_by_course(&self, course_id: DbId) -> Result<Vec<Unit>, CoreError> {
        self.store.list_by_course(course_id).await
    }
}
