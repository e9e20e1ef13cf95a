pub mod course;
pub mod health;
pub mod lesson;
pub mod media;
pub mod skill;
pub mod unit;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree. Every route requires an admin token.
///
/// Route hierarchy:
///
/// ```text
/// /courses                          list (?published_only=), create
/// /courses/slug/{slug}              get by slug
/// /courses/{id}                     get, update, delete
///
/// /units                            list (?course_id=), create
/// /units/course/{course_id}         list by course
/// /units/{id}                       get, update, delete
///
/// /skills                           list (?unit_id=), create
/// /skills/{id}                      get, update, delete
///
/// /lessons                          list (?skill_id=), create
/// /lessons/{id}                     get, update, delete
///
/// /media                            upload (multipart), download (?key=), delete (?key=)
/// /media/signed-url                 pre-signed GET URL (?key=&expires_in_secs=)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/courses", course::router())
        .nest("/units", unit::router())
        .nest("/skills", skill::router())
        .nest("/lessons", lesson::router())
        .nest("/media", media::router(max_upload_bytes))
}
