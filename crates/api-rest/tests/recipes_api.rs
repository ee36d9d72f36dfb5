//! End-to-end tests driving the real router over an in-process store.

use api_rest::{error::with_failure_handling, router, AppState, ErrorEnvelope};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::get,
    Router,
};
use cookbook_core::{FileRecipeRepository, InMemoryRecipeRepository};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn memory_app() -> Router {
    router(AppState::new(Arc::new(InMemoryRecipeRepository::new())))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, value)
}

fn recipe_body(name: &str, ingredients: &[&str]) -> Value {
    json!({
        "name": name,
        "description": format!("How to make {}", name),
        "ingredients": ingredients.iter().map(|i| json!({ "name": i })).collect::<Vec<_>>(),
    })
}

fn ingredient_names(recipe: &Value) -> Vec<String> {
    recipe["ingredients"]
        .as_array()
        .expect("ingredients should be an array")
        .iter()
        .map(|i| i["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn envelope(body: Value) -> ErrorEnvelope {
    serde_json::from_value(body).expect("body should be an error envelope")
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = memory_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("Pancakes", &["flour", "milk", "eggs"])),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty());
    assert!(created["createdAt"].is_string());
    assert_eq!(created["name"], "Pancakes");
    assert_eq!(created["description"], "How to make Pancakes");
    assert_eq!(ingredient_names(&created), vec!["flour", "milk", "eggs"]);

    let (status, fetched) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_client_supplied_identity_is_ignored() {
    let app = memory_app();
    let mut body = recipe_body("Toast", &["bread"]);
    body["id"] = json!("0123456789abcdef0123456789abcdef");
    body["createdAt"] = json!("1999-01-01T00:00:00Z");

    let (status, created) = send(&app, Method::POST, "/recipes", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], "0123456789abcdef0123456789abcdef");
    assert_ne!(created["createdAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_list_returns_recipes_in_insertion_order() {
    let app = memory_app();
    let (_, a) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("A", &["one", "two", "three"])),
    )
    .await;
    let (_, b) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("B", &["four"])),
    )
    .await;

    let (status, list) = send(&app, Method::GET, "/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([a, b]));
    assert_eq!(ingredient_names(&list[0]), vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = memory_app();

    let (status, list) = send(&app, Method::GET, "/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_get_unknown_id_returns_not_found_envelope() {
    let app = memory_app();
    let id = "0123456789abcdef0123456789abcdef";

    let (status, body) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let envelope = envelope(body);
    assert_eq!(envelope.status, 404);
    assert_eq!(envelope.error, "Not Found");
    assert_eq!(envelope.path, format!("/recipes/{}", id));
    assert_eq!(
        envelope.message,
        json!(format!("Recipe with id {} doesn't exist", id))
    );
}

#[tokio::test]
async fn test_get_non_canonical_id_is_not_found() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/recipes/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"]
        .as_str()
        .expect("message should be a string")
        .contains("does-not-exist"));
}

#[tokio::test]
async fn test_create_with_blank_name_is_rejected_and_not_stored() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "name": "", "ingredients": [{ "name": "salt" }] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let envelope = envelope(body);
    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.error, "Bad Request");
    assert_eq!(envelope.path, "/recipes");
    assert_eq!(
        envelope.message["name"],
        "Recipe name cannot be null or empty"
    );

    let (_, list) = send(&app, Method::GET, "/recipes", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({
            "description": "d".repeat(1021),
            "ingredients": [],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = &body["message"];
    assert_eq!(message["name"], "Recipe name cannot be null or empty");
    assert_eq!(
        message["description"],
        "Recipe description cannot be longer than 1020 characters"
    );
    assert_eq!(message["ingredients"], "Recipe ingredients cannot be empty");
}

#[tokio::test]
async fn test_update_preserves_identity_and_replaces_fields() {
    let app = memory_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("Soup", &["water"])),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/recipes/{}", id),
        Some(json!({
            "name": "Better soup",
            "ingredients": [{ "name": "stock" }, { "name": "leek" }],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["name"], "Better soup");
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(ingredient_names(&updated), vec!["stock", "leek"]);

    let (_, fetched) = send(&app, Method::GET, &format!("/recipes/{}", id), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_with_invalid_body_leaves_recipe_unchanged() {
    let app = memory_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("Pie", &["apples"])),
    )
    .await;
    let uri = format!("/recipes/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Pie", "ingredients": [{ "name": "  " }] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"]["ingredients[0].name"],
        "Ingredient name cannot be null or empty"
    );
    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_unknown_id_returns_not_found() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/recipes/0123456789abcdef0123456789abcdef",
        Some(recipe_body("Ghost", &["air"])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    let (_, list) = send(&app, Method::GET, "/recipes", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = memory_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(recipe_body("Jam", &["berries", "sugar"])),
    )
    .await;
    let uri = format!("/recipes/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, "/recipes/never-existed", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_enveloped() {
    let app = memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let envelope = envelope(body);
    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.path, "/recipes");
    assert!(envelope.message.is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_enveloped() {
    let app = memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .body(Body::from(recipe_body("Tea", &["leaves"]).to_string()))
        .unwrap();

    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["status"], 415);
    assert_eq!(body["path"], "/recipes");
}

#[tokio::test]
async fn test_unknown_route_is_enveloped() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/cookbooks", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/cookbooks");
}

#[tokio::test]
async fn test_wrong_method_on_known_route_is_enveloped() {
    let app = memory_app();

    let (status, body) = send(&app, Method::PATCH, "/recipes", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let envelope = envelope(body);
    assert_eq!(envelope.status, 405);
    assert_eq!(envelope.error, "Method Not Allowed");
    assert_eq!(envelope.message, json!("Method Not Allowed"));
    assert_eq!(envelope.path, "/recipes");
}

#[tokio::test]
async fn test_wrong_method_keeps_allow_header() {
    let app = memory_app();
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/recipes")
        .body(Body::empty())
        .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("router is infallible");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get(header::ALLOW)
        .and_then(|v| v.to_str().ok())
        .expect("405 should list allowed methods")
        .to_string();
    assert!(allow.contains("GET"));
    assert!(allow.contains("POST"));
}

#[tokio::test]
async fn test_panicking_handler_becomes_internal_error() {
    async fn boom() -> &'static str {
        panic!("kitchen on fire")
    }
    let app = with_failure_handling(Router::new().route("/boom", get(boom)));

    let (status, body) = send(&app, Method::GET, "/boom", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let envelope = envelope(body);
    assert_eq!(envelope.status, 500);
    assert_eq!(envelope.error, "Internal Server Error");
    assert_eq!(envelope.message, json!("kitchen on fire"));
    assert_eq!(envelope.path, "/boom");
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_file_store_persists_across_app_instances() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let collection_dir = temp_dir.path().join("recipe");
    let open_app = || {
        router(AppState::new(Arc::new(
            FileRecipeRepository::open(collection_dir.clone()).expect("store should open"),
        )))
    };

    let (status, created) = send(
        &open_app(),
        Method::POST,
        "/recipes",
        Some(recipe_body("Bread", &["flour", "water", "salt", "yeast"])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&open_app(), Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created]));
    assert_eq!(
        ingredient_names(&list[0]),
        vec!["flour", "water", "salt", "yeast"]
    );
}
