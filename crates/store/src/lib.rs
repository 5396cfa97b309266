//! Canonical state for the roster dashboard.
//!
//! Entity models and DTOs, the durable snapshot store, and the
//! repository/registry layer that owns all mutation of developers,
//! projects, and their assignments.

pub mod models;
pub mod repositories;
pub mod store;

pub use store::Store;
