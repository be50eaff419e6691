use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use database::{initialize_database, CommentRepository, DatabasePool};
use serde_json::{json, Value};
use shared_lib::AppConfig;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

async fn setup_with_pool() -> (TempDir, DatabasePool, Router) {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(AppConfig {
        database_url: format!("sqlite://{}", dir.path().join("comments.db").display()),
        ..AppConfig::default()
    });
    let pool = initialize_database(config).await.unwrap();
    let app = create_app_router(AppState::new(CommentRepository::new(pool.clone())));
    (dir, pool, app)
}

async fn setup() -> (TempDir, Router) {
    let (dir, _pool, app) = setup_with_pool().await;
    (dir, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn list(app: &Router, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/comment/get?{query}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn add_raw(app: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/comment/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn add(app: &Router, name: &str, content: &str) -> Value {
    let (status, body) = add_raw(app, &json!({"name": name, "content": content}).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

async fn delete(app: &Router, id: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/comment/delete?id={id}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn add_list_delete_scenario() {
    let (_dir, app) = setup().await;

    let (status, body) = add_raw(&app, r#"{"name":"alice","content":"hi"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"code": 0, "msg": "success", "data": {"id": 1, "name": "alice", "content": "hi"}})
    );

    let (status, body) = list(&app, "page=1&size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "code": 0,
            "msg": "success",
            "data": {"total": 1, "comments": [{"id": 1, "name": "alice", "content": "hi"}]}
        })
    );

    let (status, body) = delete(&app, "1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"code": 0, "msg": "success", "data": null}));

    let (_, body) = list(&app, "page=1&size=10").await;
    assert_eq!(body["data"], json!({"total": 0, "comments": []}));
}

#[tokio::test]
async fn added_comment_gets_fresh_id_and_is_listed() {
    let (_dir, app) = setup().await;

    let first = add(&app, "alice", "hi").await;
    let second = add(&app, "bob", "hello").await;
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());

    let (_, body) = list(&app, "page=1&size=10").await;
    assert_eq!(body["data"]["comments"], json!([first, second]));
}

#[tokio::test]
async fn delete_twice_still_succeeds() {
    let (_dir, app) = setup().await;
    let comment = add(&app, "alice", "hi").await;
    let id = comment["id"].to_string();

    let (status, body) = delete(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);

    let (status, body) = delete(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"code": 0, "msg": "success", "data": null}));

    let (_, body) = list(&app, "page=1&size=-1").await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn sentinel_size_returns_all_rows_regardless_of_page() {
    let (_dir, app) = setup().await;
    for i in 0..7 {
        add(&app, &format!("user{i}"), "text").await;
    }

    for page in ["1", "3", "-2", "abc"] {
        let (_, body) = list(&app, &format!("page={page}&size=-1")).await;
        assert_eq!(body["data"]["total"], 7);
        assert_eq!(body["data"]["comments"].as_array().unwrap().len(), 7);
    }
}

#[tokio::test]
async fn second_page_of_two_over_five_records() {
    let (_dir, app) = setup().await;
    let mut created = Vec::new();
    for i in 1..=5 {
        created.push(add(&app, &format!("user{i}"), &format!("comment {i}")).await);
    }

    let (status, body) = list(&app, "page=2&size=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["comments"], json!([created[2], created[3]]));
}

#[tokio::test]
async fn non_numeric_pagination_falls_back_to_zero() {
    let (_dir, app) = setup().await;
    add(&app, "alice", "hi").await;
    add(&app, "bob", "hello").await;

    // size按0处理，返回空列表，但总数依然正确
    let (status, body) = list(&app, "page=abc&size=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"], json!({"total": 2, "comments": []}));

    let (status, body) = list(&app, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"total": 2, "comments": []}));

    // page按0处理，偏移量小于0时从头开始
    let (_, body) = list(&app, "page=abc&size=1").await;
    assert_eq!(body["data"]["comments"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["comments"][0]["name"], "alice");
}

#[tokio::test]
async fn invalid_add_body_is_rejected_without_creating_rows() {
    let (_dir, app) = setup().await;

    for body in [
        "not json",
        r#"{"name":"alice"}"#,
        r#"{"content":"hi"}"#,
        r#"{"name":1,"content":"hi"}"#,
        "",
    ] {
        let (status, reply) = add_raw(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(reply, json!({"code": 1, "msg": "Invalid input", "data": null}));
    }

    let (_, body) = list(&app, "page=1&size=-1").await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn add_without_json_content_type_is_invalid_input() {
    let (_dir, app) = setup().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/comment/add")
        .body(Body::from(r#"{"name":"alice","content":"hi"}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid input");
}

#[tokio::test]
async fn empty_strings_are_accepted() {
    let (_dir, app) = setup().await;

    let comment = add(&app, "", "").await;

    assert_eq!(comment["name"], "");
    assert_eq!(comment["content"], "");
}

#[tokio::test]
async fn invalid_delete_id_is_rejected() {
    let (_dir, app) = setup().await;
    add(&app, "alice", "hi").await;

    for id in ["abc", "1.5", ""] {
        let (status, body) = delete(&app, id).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id: {id}");
        assert_eq!(body, json!({"code": 1, "msg": "Invalid ID", "data": null}));
    }

    let request = Request::builder()
        .method(Method::POST)
        .uri("/comment/delete")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid ID");

    let (_, body) = list(&app, "page=1&size=-1").await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let (_dir, app) = setup().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/comment/add")
        .header(header::ORIGIN, "http://localhost:5500")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"), "{methods}");
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    assert!(allowed.contains("content-type"), "{allowed}");
}

#[tokio::test]
async fn api_docs_are_served() {
    let (_dir, app) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn content_larger_than_default_body_limit_is_accepted() {
    let (_dir, app) = setup().await;
    let content = "x".repeat(3 * 1024 * 1024);

    let comment = add(&app, "alice", &content).await;
    assert_eq!(comment["content"].as_str().unwrap().len(), content.len());

    let (_, body) = list(&app, "page=1&size=-1").await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["comments"][0]["content"].as_str().unwrap().len(), content.len());
}

#[tokio::test]
async fn store_failure_returns_internal_error_envelope() {
    let (_dir, pool, app) = setup_with_pool().await;
    pool.close().await;

    let (status, body) = list(&app, "page=1&size=10").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"code": 2, "msg": "Internal error", "data": null}));

    let (status, body) = add_raw(&app, r#"{"name":"alice","content":"hi"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"code": 2, "msg": "Internal error", "data": null}));

    // 数据库的具体错误只记录日志，不出现在返回值里
    let (status, body) = delete(&app, "1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = body.to_string();
    assert!(!text.to_lowercase().contains("pool"), "{text}");
    assert!(!text.contains("数据库"), "{text}");
}
