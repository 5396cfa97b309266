//! HTTP-level integration tests for the `/projects` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json, put_json};
use chrono::{Duration, Utc};

fn project(name: &str, start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "startDate": format!("{start}T00:00:00Z"),
        "endDate": format!("{end}T00:00:00Z")
    })
}

#[tokio::test]
async fn create_project_returns_201_with_derived_status() {
    let (_, app) = common::fresh_app();
    // Dates straddle today: the derived status is inProgress.
    let start = (Utc::now() - Duration::days(10)).to_rfc3339();
    let end = (Utc::now() + Duration::days(10)).to_rfc3339();
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Sistema ERP", "startDate": start, "endDate": end}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["active"], true);
    assert_eq!(json["status"], "inProgress");
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let (_, app) = common::fresh_app();
    let response = post_json(
        app,
        "/api/v1/projects",
        project("Proyecto B", "2024-01-01", "2023-12-01"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["end_date"].is_array());
}

#[tokio::test]
async fn deactivated_project_reports_inactive_status() {
    let (store, app) = common::fresh_app();
    let start = (Utc::now() - Duration::days(10)).to_rfc3339();
    let end = (Utc::now() + Duration::days(10)).to_rfc3339();
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"name": "Sistema ERP", "startDate": start, "endDate": end}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(store.clone());
    delete(app, &format!("/api/v1/projects/{id}")).await;

    // Dates would say in-progress; the inactive flag wins.
    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(json["active"], false);
    assert_eq!(json["status"], "inactive");
}

#[tokio::test]
async fn completed_project_reports_completed_status() {
    let (_, app) = common::fresh_app();
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            project("Proyecto Viejo", "2020-01-01", "2020-06-01"),
        )
        .await,
    )
    .await;
    assert_eq!(created["status"], "completed");
}

#[tokio::test]
async fn update_and_reactivate_round_trip() {
    let (store, app) = common::fresh_app();
    let created = body_json(
        post_json(app, "/api/v1/projects", project("Proyecto A", "2024-01-01", "2024-06-01"))
            .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"name": "Proyecto A v2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Proyecto A v2");

    let app = common::build_test_app(store.clone());
    delete(app, &format!("/api/v1/projects/{id}")).await;
    let app = common::build_test_app(store);
    let response = post(app, &format!("/api/v1/projects/{id}/reactivate")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["active"], true);
}

#[tokio::test]
async fn list_filters_by_name_substring() {
    let (store, app) = common::fresh_app();
    post_json(app, "/api/v1/projects", project("Sistema ERP", "2024-01-01", "2024-06-01")).await;
    let app = common::build_test_app(store.clone());
    post_json(app, "/api/v1/projects", project("Portal Web", "2024-01-01", "2024-06-01")).await;

    let app = common::build_test_app(store);
    let json = body_json(get(app, "/api/v1/projects?q=erp").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Sistema ERP");
}
