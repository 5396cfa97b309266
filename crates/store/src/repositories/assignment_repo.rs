//! Registry for the developer-to-project assignment relation.
//!
//! Mutation is gated on both sides being active; queries are not. An
//! assignment therefore outlives the deactivation of either side and keeps
//! answering "who worked on what" until explicitly removed.

use roster_core::error::CoreError;
use roster_core::types::DbId;

use crate::models::{Assignment, Developer, Project};
use crate::store::{Snapshot, Store};

/// Owns the many-to-many developer/project relation.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Link a developer to a project.
    ///
    /// Both ids must resolve and both records must be active. A pair that
    /// already exists is left alone; duplicate assignment is a no-op, not
    /// an error.
    pub fn assign(store: &Store, developer_id: DbId, project_id: DbId) -> Result<(), CoreError> {
        store.mutate(|snapshot| {
            check_both_active(snapshot, developer_id, project_id)?;
            let pair = Assignment {
                project_id,
                developer_id,
            };
            if !snapshot.assignments.contains(&pair) {
                snapshot.assignments.push(pair);
            }
            Ok(())
        })
    }

    /// Remove the link between a developer and a project.
    ///
    /// Deactivated entities cannot have their assignments edited, only
    /// queried, so the same active gate applies as for [`Self::assign`].
    /// Removing a pair that does not exist is a no-op.
    pub fn unassign(store: &Store, developer_id: DbId, project_id: DbId) -> Result<(), CoreError> {
        store.mutate(|snapshot| {
            check_both_active(snapshot, developer_id, project_id)?;
            snapshot
                .assignments
                .retain(|a| !(a.developer_id == developer_id && a.project_id == project_id));
            Ok(())
        })
    }

    /// All projects the developer is assigned to, resolved against the
    /// current project collection (inactive projects appear with their
    /// current state).
    pub fn projects_of(store: &Store, developer_id: DbId) -> Result<Vec<Project>, CoreError> {
        store.read(|snapshot| {
            snapshot
                .developer(developer_id)
                .ok_or(CoreError::NotFound {
                    entity: "Developer",
                    id: developer_id,
                })?;
            Ok(snapshot
                .assignments
                .iter()
                .filter(|a| a.developer_id == developer_id)
                .filter_map(|a| snapshot.project(a.project_id).cloned())
                .collect())
        })
    }

    /// All developers assigned to the project; symmetric to
    /// [`Self::projects_of`].
    pub fn developers_of(store: &Store, project_id: DbId) -> Result<Vec<Developer>, CoreError> {
        store.read(|snapshot| {
            snapshot.project(project_id).ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })?;
            Ok(snapshot
                .assignments
                .iter()
                .filter(|a| a.project_id == project_id)
                .filter_map(|a| snapshot.developer(a.developer_id).cloned())
                .collect())
        })
    }

    /// The raw pair list, in insertion order.
    pub fn list(store: &Store) -> Vec<Assignment> {
        store.read(|snapshot| snapshot.assignments.clone())
    }
}

/// Resolve both sides of a pair and require them active. Resolution errors
/// (`NotFound`) take precedence over state errors (`InactiveEntity`).
fn check_both_active(
    snapshot: &Snapshot,
    developer_id: DbId,
    project_id: DbId,
) -> Result<(), CoreError> {
    let developer = snapshot.developer(developer_id).ok_or(CoreError::NotFound {
        entity: "Developer",
        id: developer_id,
    })?;
    let project = snapshot.project(project_id).ok_or(CoreError::NotFound {
        entity: "Project",
        id: project_id,
    })?;
    if !developer.active {
        return Err(CoreError::InactiveEntity {
            entity: "Developer",
            id: developer_id,
        });
    }
    if !project.active {
        return Err(CoreError::InactiveEntity {
            entity: "Project",
            id: project_id,
        });
    }
    Ok(())
}
