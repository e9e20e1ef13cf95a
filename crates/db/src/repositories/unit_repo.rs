//! Repository for the `units` table.

use bandroom_core::error::CoreError;
use bandroom_core::models::Unit;
use bandroom_core::store::UnitStore;
use bandroom_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::error::map_db_error;
use crate::DbPool;

const ENTITY: &str = "Unit";

const COLUMNS: &str =
    "id, course_id, title, description, order_index, version, deleted_at, created_at, updated_at";

#[derive(Debug, FromRow)]
struct UnitRow {
    id: DbId,
    course_id: DbId,
    title: String,
    description: String,
    order_index: i32,
    version: i32,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Unit {
            id: row.id,
            course_id: row.course_id,
            title: row.title,
            description: row.description,
            order_index: row.order_index,
            version: row.version,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL gateway for units.
#[derive(Clone)]
pub struct UnitRepo {
    pool: DbPool,
}

impl UnitRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UnitStore for UnitRepo {
    async fn insert(&self, unit: &Unit) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO units (id, course_id, title, description, order_index, version, \
                created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(unit.id)
        .bind(unit.course_id)
        .bind(&unit.title)
        .bind(&unit.description)
        .bind(unit.order_index)
        .bind(unit.version)
        .bind(unit.created_at)
        .bind(unit.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    /// The owning course is never rewritten.
    async fn update(&self, unit: &Unit, expected_version: i32) -> Result<bool, CoreError> {
        let result = sqlx::query(
            "UPDATE units SET
                title = $3,
                description = $4,
                order_index = $5,
                version = $6,
                updated_at = $7
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL",
        )
        .bind(unit.id)
        .bind(expected_version)
        .bind(&unit.title)
        .bind(&unit.description)
        .bind(unit.order_index)
        .bind(unit.version)
        .bind(unit.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: DbId) -> Result<(), CoreError> {
        sqlx::query("UPDATE units SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Unit>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1 AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, UnitRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(row.map(Unit::from))
    }

    async fn list_by_course(&self, course_id: DbId) -> Result<Vec<Unit>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM units
             WHERE course_id = $1 AND deleted_at IS NULL
             ORDER BY order_index ASC"
        );
        let rows = sqlx::query_as::<_, UnitRow>(&query)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(ENTITY, e))?;
        Ok(rows.into_iter().map(Unit::from).collect())
    }
}
