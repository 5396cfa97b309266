pub mod developer;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /developers                                      list, create
/// /developers/{id}                                 get, update, soft-delete
/// /developers/{id}/reactivate                      reactivate (POST)
/// /developers/{id}/projects                        assigned projects
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, soft-delete
/// /projects/{id}/reactivate                        reactivate (POST)
/// /projects/{id}/developers                        assigned developers
/// /projects/{project_id}/developers/{developer_id} assign (POST), unassign (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/developers", developer::router())
        .nest("/projects", project::router())
}
