//! Handlers for the assignment registry: linking and unlinking pairs, and
//! the relation queries mounted under each entity.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use roster_core::types::DbId;
use roster_store::models::Developer;
use roster_store::repositories::AssignmentRepo;

use crate::error::AppResult;
use crate::handlers::project::ProjectPayload;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/developers/{developer_id}
///
/// Repeating an existing assignment succeeds without effect.
pub async fn assign(
    State(state): State<AppState>,
    Path((project_id, developer_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    AssignmentRepo::assign(&state.store, developer_id, project_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{project_id}/developers/{developer_id}
pub async fn unassign(
    State(state): State<AppState>,
    Path((project_id, developer_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    AssignmentRepo::unassign(&state.store, developer_id, project_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/developers/{id}/projects
pub async fn projects_of_developer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectPayload>>> {
    let projects = AssignmentRepo::projects_of(&state.store, id)?
        .into_iter()
        .map(ProjectPayload::from)
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}/developers
pub async fn developers_of_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Developer>>> {
    let developers = AssignmentRepo::developers_of(&state.store, id)?;
    Ok(Json(developers))
}
