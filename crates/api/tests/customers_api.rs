//! HTTP-level integration tests for the customer endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over an in-memory store.

mod common;

use axum::http::StatusCode;
use clientele_core::store::CustomerStore;
use common::{body_json, delete, fresh_app, get, post_json, put_json};
use serde_json::json;

/// Register George and return his id.
async fn register_george(app: &axum::Router) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/customers",
        json!({"name": "George", "email": "george@x.com", "age": 22}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Register / list / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_returns_201_with_assigned_id() {
    let (app, _) = fresh_app();
    let response = post_json(
        app,
        "/api/v1/customers",
        json!({"name": "Alex", "email": "alex@x.com", "age": 21}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Alex");
    assert_eq!(json["data"]["email"], "alex@x.com");
    assert_eq!(json["data"]["age"], 21);
    assert!(json["data"]["id"].is_number());
}

#[tokio::test]
async fn register_duplicate_email_returns_409() {
    let (app, store) = fresh_app();
    register_george(&app).await;

    let response = post_json(
        app,
        "/api/v1/customers",
        json!({"name": "Ann", "email": "george@x.com", "age": 30}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "email already taken");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn register_empty_email_returns_400() {
    let (app, store) = fresh_app();
    let response = post_json(
        app,
        "/api/v1/customers",
        json!({"name": "Ann", "email": "", "age": 30}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn register_missing_field_returns_400() {
    let (app, _) = fresh_app();
    let response = post_json(
        app,
        "/api/v1/customers",
        json!({"name": "Ann", "email": "ann@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_returns_customers_in_insertion_order() {
    let (app, _) = fresh_app();
    register_george(&app).await;
    post_json(
        app.clone(),
        "/api/v1/customers",
        json!({"name": "Ann", "email": "ann@x.com", "age": 30}),
    )
    .await;

    let response = get(app, "/api/v1/customers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "George");
    assert_eq!(data[1]["name"], "Ann");
}

#[tokio::test]
async fn get_customer_by_id() {
    let (app, _) = fresh_app();
    let id = register_george(&app).await;

    let response = get(app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["email"], "george@x.com");
}

#[tokio::test]
async fn get_unknown_customer_returns_404() {
    let (app, _) = fresh_app();
    let response = get(app, "/api/v1/customers/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Customer with id 999 not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_name_only_keeps_other_fields() {
    let (app, store) = fresh_app();
    let id = register_george(&app).await;

    let response = put_json(
        app,
        &format!("/api/v1/customers/{id}"),
        json!({"name": "Daniel", "email": null, "age": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Daniel");
    assert_eq!(json["data"]["email"], "george@x.com");
    assert_eq!(json["data"]["age"], 22);

    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Daniel");
}

#[tokio::test]
async fn update_identical_values_returns_no_change() {
    let (app, _) = fresh_app();
    let id = register_george(&app).await;

    let response = put_json(
        app,
        &format!("/api/v1/customers/{id}"),
        json!({"name": "George", "email": "george@x.com", "age": 22}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NO_CHANGE");
}

#[tokio::test]
async fn update_empty_body_returns_no_change() {
    let (app, _) = fresh_app();
    let id = register_george(&app).await;

    let response = put_json(app, &format!("/api/v1/customers/{id}"), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NO_CHANGE");
}

#[tokio::test]
async fn update_to_taken_email_returns_409_and_persists_nothing() {
    let (app, store) = fresh_app();
    let id = register_george(&app).await;
    post_json(
        app.clone(),
        "/api/v1/customers",
        json!({"name": "Ann", "email": "ann@x.com", "age": 30}),
    )
    .await;

    let response = put_json(
        app,
        &format!("/api/v1/customers/{id}"),
        json!({"name": "Daniel", "email": "ann@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "George");
    assert_eq!(stored.email, "george@x.com");
}

#[tokio::test]
async fn update_unknown_customer_returns_404() {
    let (app, _) = fresh_app();
    let response = put_json(app, "/api/v1/customers/999", json!({"name": "Daniel"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_204_and_removes_customer() {
    let (app, store) = fresh_app();
    let id = register_george(&app).await;

    let response = delete(app.clone(), &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.is_empty().await);

    let response = get(app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_customer_returns_404() {
    let (app, _) = fresh_app();
    let response = delete(app, "/api/v1/customers/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
