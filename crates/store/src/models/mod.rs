//! Entity models and request DTOs.
//!
//! Each submodule provides the stored record, a `CreateX` DTO carrying the
//! validation rules, an `UpdateX` DTO with all-optional fields, and the
//! list filter for that entity. Wire names are camelCase.

pub mod assignment;
pub mod developer;
pub mod project;

pub use assignment::Assignment;
pub use developer::{CreateDeveloper, Developer, DeveloperFilter, UpdateDeveloper};
pub use project::{CreateProject, Project, ProjectFilter, UpdateProject};
