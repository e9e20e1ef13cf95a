//! HTTP-level integration tests for the `/api/courses` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth, token_for,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

// ---- Helpers ----

async fn create_course(pool: &PgPool, body: Value) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/courses", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn course_body(title: &str) -> Value {
    json!({"title": title, "language": "en", "difficulty": 1})
}

// ---- Create ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_generated_fields(pool: PgPool) {
    let admin_id = Uuid::new_v4();
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/courses",
        course_body("Intro to Rhythm"),
        &token_for(admin_id, "admin"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
    assert_eq!(json["slug"], "intro-to-rhythm");
    assert_eq!(json["version"], 1);
    assert_eq!(json["difficulty"], 1);
    assert_eq!(json["is_published"], false);
    assert_eq!(json["created_at"], json["updated_at"]);
    assert_eq!(json["creator_id"], admin_id.to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_title_is_409(pool: PgPool) {
    create_course(&pool, course_body("Intro to Rhythm")).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/courses", course_body("intro to RHYTHM"), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_explicit_slug_is_409(pool: PgPool) {
    let mut first = course_body("Rhythm One");
    first["slug"] = json!("rhythm");
    create_course(&pool, first).await;

    let mut second = course_body("Rhythm Two");
    second["slug"] = json!("rhythm");
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/courses", second, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---- Read ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_and_slug(pool: PgPool) {
    let created = create_course(&pool, course_body("Jazz & Blues!!")).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["slug"], "jazz-blues");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/courses/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/courses/slug/jazz-blues", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_course_is_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/courses/{}", Uuid::new_v4()),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/courses/slug/missing", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_published(pool: PgPool) {
    let mut published = course_body("Published Course");
    published["is_published"] = json!(true);
    create_course(&pool, published).await;
    create_course(&pool, course_body("Draft Course")).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/courses", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/courses?published_only=true", &admin_token()).await;
    let json = body_json(response).await;
    let courses = json.as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["title"], "Published Course");
}

// ---- Update ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_bumps_version_and_keeps_created_at(pool: PgPool) {
    let created = create_course(&pool, course_body("Intro to Rhythm")).await;
    let id = created["id"].as_str().unwrap();

    let mut edit = course_body("Intro to Rhythm and Metre");
    edit["description"] = json!("Counting beats");
    edit["tags"] = json!(["rhythm", "beginner"]);
    edit["metadata"] = json!({"color": "teal"});
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &format!("/api/courses/{id}"), edit, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["version"], 2);
    assert_eq!(json["slug"], "intro-to-rhythm-and-metre");
    assert_eq!(json["created_at"], created["created_at"]);
    assert_ne!(json["updated_at"], created["updated_at"]);
    assert_eq!(json["tags"], json!(["rhythm", "beginner"]));
    assert_eq!(json["metadata"]["color"], "teal");
    assert_eq!(json["creator_id"], created["creator_id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stale_version_is_409(pool: PgPool) {
    let created = create_course(&pool, course_body("Intro to Rhythm")).await;
    let uri = format!("/api/courses/{}", created["id"].as_str().unwrap());

    let mut edit = course_body("Intro to Rhythm");
    edit["version"] = json!(1);
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, edit.clone(), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A second writer still holding version 1 loses.
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &uri, edit, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_course_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/courses/{}", Uuid::new_v4()),
        course_body("Anything"),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---- Delete ----

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_204_and_hides_the_course(pool: PgPool) {
    let created = create_course(&pool, course_body("Intro to Rhythm")).await;
    let uri = format!("/api/courses/{}", created["id"].as_str().unwrap());

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The row is soft deleted, not removed.
    let deleted: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT deleted_at FROM courses WHERE id = $1")
            .bind(Uuid::parse_str(created["id"].as_str().unwrap()).unwrap())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(deleted.is_some());

    // Deleting again, or deleting an id that never existed, still succeeds.
    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete_auth(app, &uri, &admin_token()).await.status(),
        StatusCode::NO_CONTENT
    );
    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/courses/{}", Uuid::new_v4()),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
