use axum::routing::get;
use axum::Router;

use crate::handlers::unit;
use crate::state::AppState;

/// Routes mounted at `/units`.
///
/// ```text
/// GET    /                      -> list (?course_id=)
/// POST   /                      -> create
/// GET    /course/{course_id}    -> list_by_course
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(unit::list).post(unit::create))
        .route("/course/{course_id}", get(unit::list_by_course))
        .route(
            "/{id}",
            get(unit::get_by_id).put(unit::update).delete(unit::delete),
        )
}
