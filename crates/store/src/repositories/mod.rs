//! Repository layer.
//!
//! Each repository is a zero-sized struct whose methods take the [`Store`]
//! as their first argument. All mutation of the canonical collections goes
//! through here; nothing else touches the snapshot directly.
//!
//! [`Store`]: crate::Store

pub mod assignment_repo;
pub mod developer_repo;
pub mod project_repo;

pub use assignment_repo::AssignmentRepo;
pub use developer_repo::DeveloperRepo;
pub use project_repo::ProjectRepo;
