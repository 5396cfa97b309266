use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::DbId;

/// Field name to violation messages, accumulated across all checks of a
/// create/update payload so the caller sees every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Consume the accumulator: `Ok(())` when nothing was recorded,
    /// otherwise a [`CoreError::Validation`] carrying the map.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Self::new();
        for (field, kind) in errors.into_errors() {
            if let validator::ValidationErrorsKind::Field(violations) = kind {
                for violation in violations {
                    let message = violation
                        .message
                        .map(|m| m.into_owned())
                        .unwrap_or_else(|| format!("invalid value ({})", violation.code));
                    fields.add(field, message);
                }
            }
        }
        fields
    }
}

/// Domain error taxonomy.
///
/// There is deliberately no `DuplicateAssignment` variant: assigning an
/// already-assigned pair is a no-op, not an error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{entity} with id {id} is inactive and cannot be modified")]
    InactiveEntity { entity: &'static str, id: DbId },

    #[error("Storage error: {0}")]
    Storage(String),
}
