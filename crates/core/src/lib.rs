//! Domain core for the roster dashboard.
//!
//! Shared types, the error taxonomy, national-id (RUT) checksum handling,
//! field validation helpers, and pure derivations (project lifecycle
//! status). No I/O lives here; the store and API crates build on top.

pub mod error;
pub mod rut;
pub mod status;
pub mod types;
pub mod validation;
