//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `roster-store` and map errors
//! via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod assignment;
pub mod developer;
pub mod project;
