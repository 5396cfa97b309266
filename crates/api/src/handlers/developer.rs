//! Handlers for the `/developers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_store::models::{CreateDeveloper, Developer, DeveloperFilter, UpdateDeveloper};
use roster_store::repositories::DeveloperRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/developers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDeveloper>,
) -> AppResult<(StatusCode, Json<Developer>)> {
    let developer = DeveloperRepo::create(&state.store, &input)?;
    Ok((StatusCode::CREATED, Json(developer)))
}

/// GET /api/v1/developers
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DeveloperFilter>,
) -> AppResult<Json<Vec<Developer>>> {
    Ok(Json(DeveloperRepo::list(&state.store, &filter)))
}

/// GET /api/v1/developers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Developer>> {
    let developer = DeveloperRepo::find_by_id(&state.store, id).ok_or(CoreError::NotFound {
        entity: "Developer",
        id,
    })?;
    Ok(Json(developer))
}

/// PUT /api/v1/developers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeveloper>,
) -> AppResult<Json<Developer>> {
    let developer = DeveloperRepo::update(&state.store, id, &input)?;
    Ok(Json(developer))
}

/// DELETE /api/v1/developers/{id} -- soft delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    DeveloperRepo::deactivate(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/developers/{id}/reactivate
pub async fn reactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Developer>> {
    let developer = DeveloperRepo::reactivate(&state.store, id)?;
    Ok(Json(developer))
}
