//! API integration tests
//!
//! Each test starts its own server on an ephemeral port with a fresh store.

use axum::{extract::Request, ServiceExt};
use book_catalog::{api, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Spawn a server and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    let app = api::app(AppState::new(AppConfig::default()));
    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn create_book(client: &Client, base: &str, title: &str, author: &str) -> Value {
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": title, "author": author }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
}

#[tokio::test]
async fn test_catalog_scenario() {
    let base = spawn_server().await;
    let client = Client::new();

    let first = create_book(&client, &base, "A", "B").await;
    assert_eq!(first, json!({ "id": 1, "title": "A", "author": "B", "read": false }));

    let second = create_book(&client, &base, "C", "D").await;
    assert_eq!(second["id"], 2);

    let response = client
        .delete(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let books: Vec<Value> = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(books, vec![second]);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let base = spawn_server().await;
    let client = Client::new();

    let first = create_book(&client, &base, "A", "B").await;
    client
        .delete(format!("{}/books/{}", base, first["id"]))
        .send()
        .await
        .expect("Failed to send request");

    let next = create_book(&client, &base, "C", "D").await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_mark_as_read() {
    let base = spawn_server().await;
    let client = Client::new();
    create_book(&client, &base, "Dom Casmurro", "Machado de Assis").await;

    let response = client
        .patch(format!("{}/books/1/read", base))
        .json(&json!({ "read": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["read"], true);
    assert_eq!(body["author"], "Machado de Assis");
}

#[tokio::test]
async fn test_delete_missing_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/42", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFound");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_concurrent_creates() {
    let base = spawn_server().await;
    let client = Client::new();

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let base = base.clone();
            tokio::spawn(async move {
                let title = format!("Book {}", i);
                create_book(&client, &base, &title, "Anon").await["id"]
                    .as_i64()
                    .expect("No book ID")
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.expect("Task panicked"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_cors_preflight() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/books", base))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "PATCH")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_routes_listing() {
    let base = spawn_server().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/routes", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["total_routes"], 9);
    assert!(body["routes"].is_array());
}

#[tokio::test]
async fn test_create_without_content_type() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books/", base))
        .body(r#"{"title":"A","author":"B"}"#)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 1);
}
