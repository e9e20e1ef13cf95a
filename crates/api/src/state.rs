use std::sync::Arc;

use bandroom_core::services::{CourseService, LessonService, SkillService, UnitService};
use bandroom_db::repositories::{CourseRepo, LessonRepo, SkillRepo, UnitRepo};
use bandroom_storage::ObjectStore;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bandroom_db::DbPool,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Media object storage; `None` when `STORAGE_ENABLED` is off.
    pub object_store: Option<Arc<dyn ObjectStore>>,
    /// Largest accepted media upload, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn courses(&self) -> CourseService<CourseRepo> {
        CourseService::new(CourseRepo::new(self.pool.clone()))
    }

    pub fn units(&self) -> UnitService<UnitRepo> {
        UnitService::new(UnitRepo::new(self.pool.clone()))
    }

    pub fn skills(&self) -> SkillService<SkillRepo> {
        SkillService::new(SkillRepo::new(self.pool.clone()))
    }

    pub fn lessons(&self) -> LessonService<LessonRepo> {
        LessonService::new(LessonRepo::new(self.pool.clone()))
    }

    /// The configured object store, or 503 when storage is disabled.
    pub fn object_store(&self) -> Result<&dyn ObjectStore, AppError> {
        self.object_store
            .as_deref()
            .ok_or(AppError::StorageUnavailable)
    }
}
