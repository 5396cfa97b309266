//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use roster_core::error::{CoreError, FieldErrors};
use roster_core::types::{DbId, Timestamp};
use roster_core::validation::PROJECT_NAME_RE;

/// A project record. As with developers, `active == false` is a soft
/// delete: the record and its assignments are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub active: bool,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(
        length(min = 3, max = 50, message = "must be between 3 and 50 characters"),
        regex(
            path = *PROJECT_NAME_RE,
            message = "only letters, digits, spaces, hyphens and underscores are allowed"
        )
    )]
    pub name: String,

    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

impl CreateProject {
    /// Run every field constraint, including the cross-field date ordering
    /// rule, returning all violations at once.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        let mut fields = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors.into(),
        };
        if self.end_date <= self.start_date {
            fields.add("end_date", "end date must be after the start date");
        }
        fields.into_result()
    }
}

/// DTO for updating a project. All fields optional; `id` and `active` are
/// not settable through updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl UpdateProject {
    /// Merge this partial update over an existing record, producing the
    /// candidate that must pass the create-time constraints.
    pub fn merged_over(&self, existing: &Project) -> CreateProject {
        CreateProject {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            start_date: self.start_date.unwrap_or(existing.start_date),
            end_date: self.end_date.unwrap_or(existing.end_date),
        }
    }
}

/// Query filter for project listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    /// Case-insensitive substring over the project name.
    pub q: Option<String>,
    pub active: Option<bool>,
    /// Inclusive date bounds.
    pub starts_after: Option<Timestamp>,
    pub ends_before: Option<Timestamp>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(active) = self.active {
            if project.active != active {
                return false;
            }
        }
        if let Some(after) = self.starts_after {
            if project.start_date < after {
                return false;
            }
        }
        if let Some(before) = self.ends_before {
            if project.end_date > before {
                return false;
            }
        }
        if let Some(q) = &self.q {
            return project.name.to_lowercase().contains(&q.to_lowercase());
        }
        true
    }
}
