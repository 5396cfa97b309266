//! Route definitions for the `/projects` resource.
//!
//! Also mounts the assignment endpoints under
//! `/projects/{project_id}/developers/{developer_id}`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assignment, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                     -> list
/// POST   /                                     -> create
/// GET    /{id}                                 -> get_by_id
/// PUT    /{id}                                 -> update
/// DELETE /{id}                                 -> delete (soft)
/// POST   /{id}/reactivate                      -> reactivate
/// GET    /{id}/developers                      -> assigned developers
/// POST   /{project_id}/developers/{developer_id}   -> assign
/// DELETE /{project_id}/developers/{developer_id}   -> unassign
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/reactivate", post(project::reactivate))
        .route("/{id}/developers", get(assignment::developers_of_project))
        .route(
            "/{project_id}/developers/{developer_id}",
            post(assignment::assign).delete(assignment::unassign),
        )
}
