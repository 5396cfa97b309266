//! HTTP-level integration tests for assignment endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json};
use roster_store::Store;

/// Seed one developer and one project, returning (store, dev_id, project_id).
async fn seeded() -> (Arc<Store>, i64, i64) {
    let (store, app) = common::fresh_app();
    let dev = body_json(
        post_json(
            app,
            "/api/v1/developers",
            serde_json::json!({
                "fullName": "Juan Pérez",
                "nationalId": "12345678-5",
                "email": "juan@x.com",
                "hireDate": "2023-01-15T00:00:00Z",
                "yearsExperience": 5
            }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(store.clone());
    let project = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({
                "name": "Proyecto A",
                "startDate": "2024-01-01T00:00:00Z",
                "endDate": "2024-06-01T00:00:00Z"
            }),
        )
        .await,
    )
    .await;

    (
        store,
        dev["id"].as_i64().unwrap(),
        project["id"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn assign_links_pair_and_is_idempotent() {
    let (store, dev_id, project_id) = seeded().await;

    let app = common::build_test_app(store.clone());
    let response = post(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Assigning the same pair again succeeds without duplicating it.
    let app = common::build_test_app(store.clone());
    let response = post(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(store.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/developers")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], dev_id);

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/v1/developers/{dev_id}/projects")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], project_id);
}

#[tokio::test]
async fn assign_to_unknown_project_returns_404() {
    let (store, dev_id, _) = seeded().await;
    let app = common::build_test_app(store);
    let response = post(app, &format!("/api/v1/projects/999/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assign_against_inactive_developer_returns_409() {
    let (store, dev_id, project_id) = seeded().await;

    let app = common::build_test_app(store.clone());
    delete(app, &format!("/api/v1/developers/{dev_id}")).await;

    let app = common::build_test_app(store);
    let response = post(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INACTIVE_ENTITY");
}

#[tokio::test]
async fn unassign_absent_pair_is_a_noop() {
    let (store, dev_id, project_id) = seeded().await;
    let app = common::build_test_app(store);
    let response = delete(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn assignments_remain_queryable_after_deactivation() {
    let (store, dev_id, project_id) = seeded().await;

    let app = common::build_test_app(store.clone());
    post(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;

    let app = common::build_test_app(store.clone());
    delete(app, &format!("/api/v1/projects/{project_id}")).await;

    // The developer's project list still shows the retired project, with
    // its current state and derived status.
    let app = common::build_test_app(store.clone());
    let json = body_json(get(app, &format!("/api/v1/developers/{dev_id}/projects")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["active"], false);
    assert_eq!(json[0]["status"], "inactive");

    // But editing the assignment through the retired side is refused.
    let app = common::build_test_app(store);
    let response = delete(app, &format!("/api/v1/projects/{project_id}/developers/{dev_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
