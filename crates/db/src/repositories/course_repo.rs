//! Repository for the `courses` table.

use bandroom_core::error::CoreError;
use bandroom_core::models::{Course, Difficulty};
use bandroom_core::store::CourseStore;
use bandroom_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::codec::{decode_metadata, encode_metadata};
use crate::error::map_db_error;
use crate::DbPool;

const ENTITY: &str = "Course";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, language, difficulty, is_published, \
    tags, metadata, version, deleted_at, created_at, updated_at, creator_id";

#[derive(Debug, FromRow)]
struct CourseRow {
    id: DbId,
    slug: String,
    title: String,
    description: String,
    language: String,
    difficulty: i16,
    is_published: bool,
    tags: Vec<String>,
    metadata: String,
    version: i32,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
    creator_id: Option<DbId>,
}

impl TryFrom<CourseRow> for Course {
    type Error = CoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Ok(Course {
            id: row.id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            language: row.language,
            difficulty: Difficulty::try_from(row.difficulty)
                .map_err(|e| CoreError::Internal(format!("stored course {}: {e}", row.id)))?,
            is_published: row.is_published,
            tags: row.tags,
            metadata: decode_metadata(ENTITY, &row.metadata)?,
            version: row.version,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            creator_id: row.creator_id,
        })
    }
}

/// PostgreSQL gateway for courses.
#[derive(Clone)]
pub struct CourseRepo {
    pool: DbPool,
}

impl CourseRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CourseStore for CourseRepo {
    async fn insert(&self, course: &Course) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO courses (id, slug, title, description, language, difficulty, \
                is_published, tags, metadata, version, created_at, updated_at, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(course.id)
        .bind(&course.slug)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.language)
        .bind(course.difficulty.as_i16())
        .bind(course.is_published)
        .bind(&course.tags)
        .bind(encode_metadata(&course.metadata))
        .bind(course.version)
        .bind(course.created_at)
        .bind(course.updated_at)
        .bind(course.creator_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    async fn update(&self, course: &Course, expected_version: i32) -> Result<bool, CoreError> {
        let result = sqlx::query(
            "UPDATE courses SET
                slug = $3,
                title = $4,
                description = $5,
                language = $6,
                difficulty = $7,
                is_published = $8,
                tags = $9,
                metadata = $10,
                version = $11,
                updated_at = $12
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL",
        )
        .bind(course.id)
        .bind(expected_version)
        .bind(&course.slug)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.language)
        .bind(course.difficulty.as_i16())
        .bind(course.is_published)
        .bind(&course.tags)
        .bind(encode_metadata(&course.metadata))
        .bind(course.version)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: DbId) -> Result<(), CoreError> {
        sqlx::query("UPDATE courses SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Course>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .map(Course::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, CoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM courses WHERE slug = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .map(Course::try_from)
            .transpose()
    }

    async fn list(&self, published_only: bool) -> Result<Vec<Course>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE deleted_at IS NULL AND ($1 = FALSE OR is_published)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(published_only)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .into_iter()
            .map(Course::try_from)
            .collect()
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, CoreError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM courses WHERE LOWER(title) = LOWER($1) AND deleted_at IS NULL
             )",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(exists)
    }
}
