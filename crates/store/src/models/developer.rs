//! Developer entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use roster_core::error::{CoreError, FieldErrors};
use roster_core::types::{DbId, Timestamp};
use roster_core::validation::{allowed_email_domain, not_in_future, valid_rut, FULL_NAME_RE};
use roster_core::rut;

/// A developer record. `active == false` means soft-deleted: the record is
/// retained and queryable, but blocked from new assignment mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: DbId,
    pub full_name: String,
    /// Canonical formatted RUT (`12.345.678-5`).
    pub national_id: String,
    pub email: String,
    pub hire_date: Timestamp,
    pub years_experience: i32,
    pub active: bool,
}

/// DTO for creating a developer. Carries every field constraint; `id` and
/// `active` are assigned by the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloper {
    #[validate(
        length(min = 2, max = 200, message = "must be between 2 and 200 characters"),
        regex(path = *FULL_NAME_RE, message = "only letters and spaces are allowed")
    )]
    pub full_name: String,

    #[validate(custom(function = valid_rut))]
    pub national_id: String,

    #[validate(
        length(max = 100, message = "must not exceed 100 characters"),
        email(message = "must be a valid e-mail address"),
        custom(function = allowed_email_domain)
    )]
    pub email: String,

    /// Full RFC 3339 date-time on the wire (`2023-01-15T00:00:00Z`);
    /// date-only strings are rejected at deserialization.
    #[validate(custom(function = not_in_future))]
    pub hire_date: Timestamp,

    #[validate(range(min = 0, max = 50, message = "must be between 0 and 50"))]
    pub years_experience: i32,
}

impl CreateDeveloper {
    /// Run every field constraint, returning all violations at once.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        let fields = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors.into(),
        };
        fields.into_result()
    }
}

/// DTO for updating a developer. All fields optional; omitted fields keep
/// their stored value. `id` and `active` are not settable through updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeveloper {
    pub full_name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<Timestamp>,
    pub years_experience: Option<i32>,
}

impl UpdateDeveloper {
    /// Merge this partial update over an existing record, producing the
    /// candidate that must pass the create-time constraints.
    pub fn merged_over(&self, existing: &Developer) -> CreateDeveloper {
        CreateDeveloper {
            full_name: self
                .full_name
                .clone()
                .unwrap_or_else(|| existing.full_name.clone()),
            national_id: self
                .national_id
                .clone()
                .unwrap_or_else(|| existing.national_id.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            hire_date: self.hire_date.unwrap_or(existing.hire_date),
            years_experience: self.years_experience.unwrap_or(existing.years_experience),
        }
    }
}

/// Query filter for developer listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperFilter {
    /// Case-insensitive substring over name, e-mail, and national id.
    pub q: Option<String>,
    pub active: Option<bool>,
    /// Inclusive bounds on years of experience.
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    /// Inclusive bounds on hire date.
    pub hired_after: Option<Timestamp>,
    pub hired_before: Option<Timestamp>,
}

impl DeveloperFilter {
    pub fn matches(&self, developer: &Developer) -> bool {
        if let Some(active) = self.active {
            if developer.active != active {
                return false;
            }
        }
        if let Some(min) = self.min_experience {
            if developer.years_experience < min {
                return false;
            }
        }
        if let Some(max) = self.max_experience {
            if developer.years_experience > max {
                return false;
            }
        }
        if let Some(after) = self.hired_after {
            if developer.hire_date < after {
                return false;
            }
        }
        if let Some(before) = self.hired_before {
            if developer.hire_date > before {
                return false;
            }
        }
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            let id_haystack = rut::normalize(&developer.national_id);
            return developer.full_name.to_lowercase().contains(&needle)
                || developer.email.to_lowercase().contains(&needle)
                || developer.national_id.to_lowercase().contains(&needle)
                || id_haystack.to_lowercase().contains(&needle);
        }
        true
    }
}
