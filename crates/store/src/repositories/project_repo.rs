//! Repository for the project collection.

use roster_core::error::CoreError;
use roster_core::types::DbId;

use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::store::Store;

/// CRUD plus soft-delete/reactivate for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Validate and insert a new project. Same id and atomicity rules as
    /// developer creation.
    pub fn create(store: &Store, input: &CreateProject) -> Result<Project, CoreError> {
        input.validate_fields()?;
        store.mutate(|snapshot| {
            let project = Project {
                id: snapshot.next_project_id(),
                name: input.name.clone(),
                start_date: input.start_date,
                end_date: input.end_date,
                active: true,
            };
            snapshot.projects.push(project.clone());
            Ok(project)
        })
    }

    pub fn find_by_id(store: &Store, id: DbId) -> Option<Project> {
        store.read(|snapshot| snapshot.project(id).cloned())
    }

    pub fn list(store: &Store, filter: &ProjectFilter) -> Vec<Project> {
        store.read(|snapshot| {
            snapshot
                .projects
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        })
    }

    /// Merge a partial update over the stored record, re-validating the
    /// merged result (including the date-ordering rule) before applying.
    pub fn update(store: &Store, id: DbId, input: &UpdateProject) -> Result<Project, CoreError> {
        store.mutate(|snapshot| {
            let existing = snapshot.project(id).ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
            let merged = input.merged_over(existing);
            merged.validate_fields()?;

            let record = snapshot.project_mut(id).ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
            record.name = merged.name;
            record.start_date = merged.start_date;
            record.end_date = merged.end_date;
            Ok(record.clone())
        })
    }

    /// Soft-delete: flip `active` to false. Idempotent.
    pub fn deactivate(store: &Store, id: DbId) -> Result<Project, CoreError> {
        Self::set_active(store, id, false)
    }

    /// Undo a soft delete. Idempotent.
    pub fn reactivate(store: &Store, id: DbId) -> Result<Project, CoreError> {
        Self::set_active(store, id, true)
    }

    fn set_active(store: &Store, id: DbId, active: bool) -> Result<Project, CoreError> {
        store.mutate(|snapshot| {
            let record = snapshot.project_mut(id).ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
            record.active = active;
            Ok(record.clone())
        })
    }
}
