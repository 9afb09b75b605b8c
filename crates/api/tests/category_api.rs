//! HTTP-level integration tests for the `/cat` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_category_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/cat", json!({"name": "Недвижимость"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Недвижимость");
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_category_ignores_unknown_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/cat", json!({"name": "Pets", "color": "red"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Pets");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_category_body_returns_wrong_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/cat", "name=Pets").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"status": "Wrong data"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_without_name_returns_wrong_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/cat", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"status": "Wrong data"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_category_name_returns_wrong_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/cat", json!({"name": "c".repeat(51)})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"status": "Wrong data"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_matches_row_count(pool: PgPool) {
    for name in ["Авто", "Книги"] {
        post_json(common::build_test_app(pool.clone()), "/cat", json!({"name": name})).await;
    }

    let response = get(common::build_test_app(pool), "/cat").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Авто", "Книги"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_category_by_id(pool: PgPool) {
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/cat",
            json!({"name": "Электроника"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/cat/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id, "name": "Электроника"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_category_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/cat/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not found"}));
}
