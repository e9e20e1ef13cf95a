//! Repository for the `skills` table.

use bandroom_core::error::CoreError;
use bandroom_core::models::Skill;
use bandroom_core::store::SkillStore;
use bandroom_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::codec::{decode_metadata, encode_metadata};
use crate::error::map_db_error;
use crate::DbPool;

const ENTITY: &str = "Skill";

const COLUMNS: &str = "id, course_id, unit_id, slug, title, icon, order_index, difficulty, \
    max_crowns, base_xp_reward, xp_per_crown, prerequisite_skill_ids, creator_id, tags, \
    metadata, version, deleted_at, created_at, updated_at";

#[derive(Debug, FromRow)]
struct SkillRow {
    id: DbId,
    course_id: DbId,
    unit_id: DbId,
    slug: String,
    title: String,
    icon: String,
    order_index: i32,
    difficulty: i32,
    max_crowns: i32,
    base_xp_reward: i32,
    xp_per_crown: i32,
    prerequisite_skill_ids: Vec<DbId>,
    creator_id: DbId,
    tags: Vec<String>,
    metadata: String,
    version: i32,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TryFrom<SkillRow> for Skill {
    type Error = CoreError;

    fn try_from(row: SkillRow) -> Result<Self, Self::Error> {
        Ok(Skill {
            metadata: decode_metadata(ENTITY, &row.metadata)?,
            id: row.id,
            course_id: row.course_id,
            unit_id: row.unit_id,
            slug: row.slug,
            title: row.title,
            icon: row.icon,
            order_index: row.order_index,
            difficulty: row.difficulty,
            max_crowns: row.max_crowns,
            base_xp_reward: row.base_xp_reward,
            xp_per_crown: row.xp_per_crown,
            prerequisite_skill_ids: row.prerequisite_skill_ids,
            creator_id: row.creator_id,
            tags: row.tags,
            version: row.version,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL gateway for skills.
#[derive(Clone)]
pub struct SkillRepo {
    pool: DbPool,
}

impl SkillRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SkillStore for SkillRepo {
    async fn insert(&self, skill: &Skill) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO skills (id, course_id, unit_id, slug, title, icon, order_index, \
                difficulty, max_crowns, base_xp_reward, xp_per_crown, prerequisite_skill_ids, \
                creator_id, tags, metadata, version, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                $17, $18)",
        )
        .bind(skill.id)
        .bind(skill.course_id)
        .bind(skill.unit_id)
        .bind(&skill.slug)
        .bind(&skill.title)
        .bind(&skill.icon)
        .bind(skill.order_index)
        .bind(skill.difficulty)
        .bind(skill.max_crowns)
        .bind(skill.base_xp_reward)
        .bind(skill.xp_per_crown)
        .bind(&skill.prerequisite_skill_ids)
        .bind(skill.creator_id)
        .bind(&skill.tags)
        .bind(encode_metadata(&skill.metadata))
        .bind(skill.version)
        .bind(skill.created_at)
        .bind(skill.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    /// Course, unit and creator are never rewritten.
    async fn update(&self, skill: &Skill, expected_version: i32) -> Result<bool, CoreError> {
        let result = sqlx::query(
            "UPDATE skills SET
                slug = $3,
                title = $4,
                icon = $5,
                order_index = $6,
                difficulty = $7,
                max_crowns = $8,
                base_xp_reward = $9,
                xp_per_crown = $10,
                prerequisite_skill_ids = $11,
                tags = $12,
                metadata = $13,
                version = $14,
                updated_at = $15
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL",
        )
        .bind(skill.id)
        .bind(expected_version)
        .bind(&skill.slug)
        .bind(&skill.title)
        .bind(&skill.icon)
        .bind(skill.order_index)
        .bind(skill.difficulty)
        .bind(skill.max_crowns)
        .bind(skill.base_xp_reward)
        .bind(skill.xp_per_crown)
        .bind(&skill.prerequisite_skill_ids)
        .bind(&skill.tags)
        .bind(encode_metadata(&skill.metadata))
        .bind(skill.version)
        .bind(skill.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: DbId) -> Result<(), CoreError> {
        sqlx::query("UPDATE skills SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Skill>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, SkillRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .map(Skill::try_from)
            .transpose()
    }

    async fn list_by_unit(&self, unit_id: DbId) -> Result<Vec<Skill>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE unit_id = $1 AND deleted_at IS NULL
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, SkillRow>(&query)
            .bind(unit_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?
            .into_iter()
            .map(Skill::try_from)
            .collect()
    }

    async fn unit_course_id(&self, unit_id: DbId) -> Result<Option<DbId>, CoreError> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT course_id FROM units WHERE id = $1 AND deleted_at IS NULL")
                .bind(unit_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(row.map(|(course_id,)| course_id))
    }

    async fn exists_by_title_in_course(
        &self,
        course_id: DbId,
        title: &str,
    ) -> Result<bool, CoreError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM skills
                WHERE course_id = $1
                  AND LOWER(title) = LOWER($2)
                  AND deleted_at IS NULL
             )",
        )
        .bind(course_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(exists)
    }
}
