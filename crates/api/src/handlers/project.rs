//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use roster_core::error::CoreError;
use roster_core::status::{project_status, ProjectStatus};
use roster_core::types::DbId;
use roster_store::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use roster_store::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// A project as served to clients: the stored record plus its lifecycle
/// status, derived at read time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(flatten)]
    pub record: Project,
    pub status: ProjectStatus,
}

impl From<Project> for ProjectPayload {
    fn from(record: Project) -> Self {
        let status = project_status(
            record.active,
            record.start_date,
            record.end_date,
            Utc::now(),
        );
        Self { record, status }
    }
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectPayload>)> {
    let project = ProjectRepo::create(&state.store, &input)?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<Vec<ProjectPayload>>> {
    let projects = ProjectRepo::list(&state.store, &filter)
        .into_iter()
        .map(ProjectPayload::from)
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectPayload>> {
    let project = ProjectRepo::find_by_id(&state.store, id).ok_or(CoreError::NotFound {
        entity: "Project",
        id,
    })?;
    Ok(Json(project.into()))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectPayload>> {
    let project = ProjectRepo::update(&state.store, id, &input)?;
    Ok(Json(project.into()))
}

/// DELETE /api/v1/projects/{id} -- soft delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ProjectRepo::deactivate(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/reactivate
pub async fn reactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectPayload>> {
    let project = ProjectRepo::reactivate(&state.store, id)?;
    Ok(Json(project.into()))
}
