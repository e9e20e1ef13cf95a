//! HTTP-level tests for the `/api/media` routes against an in-memory store.

mod common;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use bandroom_storage::ObjectStore;
use common::{
    admin_token, body_bytes, body_json, delete_auth, get_auth, post_multipart_auth,
    FakeObjectStore, TEST_MAX_UPLOAD_BYTES,
};

fn app_with(store: &Arc<FakeObjectStore>) -> axum::Router {
    let store: Arc<dyn ObjectStore> = store.clone();
    common::build_offline_app(Some(store))
}

#[tokio::test]
async fn media_routes_are_503_when_storage_is_disabled() {
    let token = admin_token();

    let response = get_auth(common::build_offline_app(None), "/api/media?key=a.png", &token).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "STORAGE_UNAVAILABLE");

    let response = post_multipart_auth(
        common::build_offline_app(None),
        "/api/media",
        &[("file", Some("a.png"), Some("image/png"), b"png")],
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = get_auth(
        common::build_offline_app(None),
        "/api/media/signed-url?key=a.png",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn upload_to_an_explicit_path() {
    let store = Arc::new(FakeObjectStore::default());
    let response = post_multipart_auth(
        app_with(&store),
        "/api/media",
        &[
            ("file", Some("intro.mp3"), Some("audio/mpeg"), b"ID3-audio"),
            ("path", None, None, b"lessons/clap/intro.mp3"),
        ],
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["key"], "lessons/clap/intro.mp3");
    assert_eq!(
        json["url"],
        "https://media.bandroom.test/media/lessons/clap/intro.mp3"
    );
    assert!(store.contains("lessons/clap/intro.mp3"));
}

#[tokio::test]
async fn upload_without_path_generates_a_key() {
    let store = Arc::new(FakeObjectStore::default());
    let response = post_multipart_auth(
        app_with(&store),
        "/api/media",
        &[("file", Some("drum loop.wav"), Some("audio/wav"), b"RIFF")],
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let key = json["key"].as_str().unwrap();
    assert!(key.starts_with("uploads/"), "unexpected key {key}");
    assert!(key.ends_with("-drum_loop.wav"), "unexpected key {key}");
    assert!(store.contains(key));
}

#[tokio::test]
async fn upload_without_a_file_is_400() {
    let store = Arc::new(FakeObjectStore::default());
    let response = post_multipart_auth(
        app_with(&store),
        "/api/media",
        &[("path", None, None, b"a.png")],
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_over_the_limit_is_413() {
    let store = Arc::new(FakeObjectStore::default());
    let too_big = vec![0u8; TEST_MAX_UPLOAD_BYTES + 1];
    let response = post_multipart_auth(
        app_with(&store),
        "/api/media",
        &[("file", Some("big.bin"), None, &too_big)],
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_to_a_relative_path_is_400() {
    let store = Arc::new(FakeObjectStore::default());
    let response = post_multipart_auth(
        app_with(&store),
        "/api/media",
        &[
            ("file", Some("a.png"), Some("image/png"), b"png"),
            ("path", None, None, b"../escape.png"),
        ],
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_returns_bytes_and_content_type() {
    let store = Arc::new(FakeObjectStore::default());
    store.put("covers/rhythm.png", b"\x89PNG", "image/png");

    let response = get_auth(
        app_with(&store),
        "/api/media?key=covers/rhythm.png",
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
    assert_eq!(body_bytes(response).await, b"\x89PNG");
}

#[tokio::test]
async fn download_of_a_missing_object_is_404() {
    let store = Arc::new(FakeObjectStore::default());
    let response = get_auth(app_with(&store), "/api/media?key=nope.png", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_object() {
    let store = Arc::new(FakeObjectStore::default());
    store.put("a.png", b"png", "image/png");

    let response = delete_auth(app_with(&store), "/api/media?key=a.png", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!store.contains("a.png"));
}

#[tokio::test]
async fn signed_url_defaults_and_bounds() {
    let store = Arc::new(FakeObjectStore::default());

    let response = get_auth(
        app_with(&store),
        "/api/media/signed-url?key=a.png",
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expires_in_secs"], 900);
    assert_eq!(json["url"], "https://media.bandroom.test/media/a.png?expires=900");

    let response = get_auth(
        app_with(&store),
        "/api/media/signed-url?key=a.png&expires_in_secs=3600",
        &admin_token(),
    )
    .await;
    assert_eq!(body_json(response).await["expires_in_secs"], 3600);

    for bad in ["0", "604801"] {
        let response = get_auth(
            app_with(&store),
            &format!("/api/media/signed-url?key=a.png&expires_in_secs={bad}"),
            &admin_token(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "expires_in_secs={bad}");
    }
}
