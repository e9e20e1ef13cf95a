//! Repository for the `lessons` table.

use bandroom_core::error::CoreError;
use bandroom_core::models::Lesson;
use bandroom_core::store::LessonStore;
use bandroom_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::codec::{decode_metadata, encode_metadata};
use crate::error::map_db_error;
use crate::DbPool;

const ENTITY: &str = "Lesson";

const COLUMNS: &str = "id, skill_id, slug, title, description, order_index, total_exercises, \
    base_xp, bonus_xp, reward_gems, reward_hearts, reward_condition, estimated_duration, \
    difficulty_rating, is_testable, creator_id, tags, metadata, version, deleted_at, \
    created_at, updated_at";

#[derive(Debug, FromRow)]
struct LessonRow {
    id: DbId,
    skill_id: DbId,
    slug: String,
    title: String,
    description: String,
    order_index: i32,
    total_exercises: i32,
    base_xp: i32,
    bonus_xp: i32,
    reward_gems: i32,
    reward_hearts: i32,
    reward_condition: String,
    estimated_duration: i32,
    difficulty_rating: f32,
    is_testable: bool,
    creator_id: Option<DbId>,
    tags: Vec<String>,
    metadata: String,
    version: i32,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TryFrom<LessonRow> for Lesson {
    type Error = CoreError;

    fn try_from(row: LessonRow) -> Result<Self, Self::Error> {
        Ok(Lesson {
            metadata: decode_metadata(ENTITY, &row.metadata)?,
            id: row.id,
            skill_id: row.skill_id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            order_index: row.order_index,
            total_exercises: row.total_exercises,
            base_xp: row.base_xp,
            bonus_xp: row.bonus_xp,
            reward_gems: row.reward_gems,
            reward_hearts: row.reward_hearts,
            reward_condition: row.reward_condition,
            estimated_duration: row.estimated_duration,
            difficulty_rating: row.difficulty_rating,
            is_testable: row.is_testable,
            creator_id: row.creator_id,
            tags: row.tags,
            version: row.version,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL gateway for lessons.
#[derive(Clone)]
pub struct LessonRepo {
    pool: DbPool,
}

impl LessonRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl LessonStore for LessonRepo {
    async fn insert(&self, lesson: &Lesson) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO lessons (id, skill_id, slug, title, description, order_index, \
                total_exercises, base_xp, bonus_xp, reward_gems, reward_hearts, \
                reward_condition, estimated_duration, difficulty_rating, is_testable, \
                creator_id, tags, metadata, version, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                $17, $18, $19, $20, $21)",
        )
        .bind(lesson.id)
        .bind(lesson.skill_id)
        .bind(&lesson.slug)
        .bind(&lesson.title)
        .bind(&lesson.description)
        .bind(lesson.order_index)
        .bind(lesson.total_exercises)
        .bind(lesson.base_xp)
        .bind(lesson.bonus_xp)
        .bind(lesson.reward_gems)
        .bind(lesson.reward_hearts)
        .bind(&lesson.reward_condition)
        .bind(lesson.estimated_duration)
        .bind(lesson.difficulty_rating)
        .bind(lesson.is_testable)
        .bind(lesson.creator_id)
        .bind(&lesson.tags)
        .bind(encode_metadata(&lesson.metadata))
        .bind(lesson.version)
        .bind(lesson.created_at)
        .bind(lesson.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    /// Skill and creator are never rewritten.
    async fn update(&self, lesson: &Lesson, expected_version: i32) -> Result<bool, CoreError> {
        let result = sqlx::query(
            "UPDATE lessons SET
                slug = $3,
                title = $4,
                description = $5,
                order_index = $6,
                total_exercises = $7,
                base_xp = $8,
                bonus_xp = $9,
                reward_gems = $10,
                reward_hearts = $11,
                reward_condition = $12,
                estimated_duration = $13,
                difficulty_rating = $14,
                is_testable = $15,
                tags = $16,
                metadata = $17,
                version = $18,
                updated_at = $19
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL",
        )
        .bind(lesson.id)
        .bind(expected_version)
        .bind(&lesson.slug)
        .bind(&lesson.title)
        .bind(&lesson.description)
        .bind(lesson.order_index)
        .bind(lesson.total_exercises)
        .bind(lesson.base_xp)
        .bind(lesson.bonus_xp)
        .bind(lesson.reward_gems)
        .bind(lesson.reward_hearts)
        .bind(&lesson.reward_condition)
        .bind(lesson.estimated_duration)
        .bind(lesson.difficulty_rating)
        .bind(lesson.is_testable)
        .bind(&lesson.tags)
        .bind(encode_metadata(&lesson.metadata))
        .bind(lesson.version)
        .bind(lesson.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: DbId) -> Result<(), CoreError> {
        sqlx::query("UPDATE lessons SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Lesson>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, LessonRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .map(Lesson::try_from)
            .transpose()
    }

    async fn list_by_skill(&self, skill_id: DbId) -> Result<Vec<Lesson>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE skill_id = $1 AND deleted_at IS NULL
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, LessonRow>(&query)
            .bind(skill_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .into_iter()
            .map(Lesson::try_from)
            .collect()
    }

    async fn exists_by_title_in_skill(
        &self,
        skill_id: DbId,
        title: &str,
    ) -> Result<bool, CoreError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM lessons
                WHERE skill_id = $1 AND LOWER(title) = LOWER($2) AND deleted_at IS NULL
             )",
        )
        .bind(skill_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(exists)
    }
}
