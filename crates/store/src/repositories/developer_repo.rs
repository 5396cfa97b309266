//! Repository for the developer collection.

use roster_core::error::CoreError;
use roster_core::rut;
use roster_core::types::DbId;

use crate::models::{CreateDeveloper, Developer, DeveloperFilter, UpdateDeveloper};
use crate::store::Store;

/// CRUD plus soft-delete/reactivate for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Validate and insert a new developer.
    ///
    /// The id is one past the highest ever assigned (never recycled), the
    /// record starts active, and the national id is stored in canonical
    /// formatted form. Any constraint violation aborts with the full
    /// field-error map and no state change.
    pub fn create(store: &Store, input: &CreateDeveloper) -> Result<Developer, CoreError> {
        input.validate_fields()?;
        store.mutate(|snapshot| {
            let developer = Developer {
                id: snapshot.next_developer_id(),
                full_name: input.full_name.clone(),
                national_id: rut::format(&input.national_id),
                email: input.email.clone(),
                hire_date: input.hire_date,
                years_experience: input.years_experience,
                active: true,
            };
            snapshot.developers.push(developer.clone());
            Ok(developer)
        })
    }

    pub fn find_by_id(store: &Store, id: DbId) -> Option<Developer> {
        store.read(|snapshot| snapshot.developer(id).cloned())
    }

    pub fn list(store: &Store, filter: &DeveloperFilter) -> Vec<Developer> {
        store.read(|snapshot| {
            snapshot
                .developers
                .iter()
                .filter(|d| filter.matches(d))
                .cloned()
                .collect()
        })
    }

    /// Merge a partial update over the stored record, re-validating the
    /// merged result against the create-time constraints.
    pub fn update(store: &Store, id: DbId, input: &UpdateDeveloper) -> Result<Developer, CoreError> {
        store.mutate(|snapshot| {
            let existing = snapshot.developer(id).ok_or(CoreError::NotFound {
                entity: "Developer",
                id,
            })?;
            let merged = input.merged_over(existing);
            merged.validate_fields()?;

            let record = snapshot
                .developer_mut(id)
                .ok_or(CoreError::NotFound {
                    entity: "Developer",
                    id,
                })?;
            record.full_name = merged.full_name;
            record.national_id = rut::format(&merged.national_id);
            record.email = merged.email;
            record.hire_date = merged.hire_date;
            record.years_experience = merged.years_experience;
            Ok(record.clone())
        })
    }

    /// Soft-delete: flip `active` to false. Idempotent; deactivating an
    /// already-inactive record succeeds without change.
    pub fn deactivate(store: &Store, id: DbId) -> Result<Developer, CoreError> {
        Self::set_active(store, id, false)
    }

    /// Undo a soft delete. Idempotent, like [`Self::deactivate`].
    pub fn reactivate(store: &Store, id: DbId) -> Result<Developer, CoreError> {
        Self::set_active(store, id, true)
    }

    fn set_active(store: &Store, id: DbId, active: bool) -> Result<Developer, CoreError> {
        store.mutate(|snapshot| {
            let record = snapshot.developer_mut(id).ok_or(CoreError::NotFound {
                entity: "Developer",
                id,
            })?;
            record.active = active;
            Ok(record.clone())
        })
    }
}
