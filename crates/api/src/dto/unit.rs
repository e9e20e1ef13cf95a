use bandroom_core::models::{Unit, UnitDraft};
use bandroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UnitRequest {
    pub course_id: DbId,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
    pub version: Option<i32>,
}

impl From<UnitRequest> for UnitDraft {
    fn from(r: UnitRequest) -> Self {
        UnitDraft {
            course_id: r.course_id,
            title: r.title,
            description: r.description,
            order_index: r.order_index,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitResponse {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Unit> for UnitResponse {
    fn from(u: Unit) -> Self {
        UnitResponse {
            id: u.id,
            course_id: u.course_id,
            title: u.title,
            description: u.description,
            order_index: u.order_index,
            version: u.version,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UnitListQuery {
    pub course_id: DbId,
}
