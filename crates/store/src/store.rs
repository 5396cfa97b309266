//! Durable key-value style store for the three canonical collections.
//!
//! The store owns its collections behind a single `RwLock` and is
//! constructed once per process, then injected into the repositories; no
//! ambient singleton exists. Durability is an optional JSON snapshot file
//! holding the whole state, rewritten after each successful mutation. A
//! snapshot that fails to load falls back to empty collections rather than
//! refusing to start.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use roster_core::error::CoreError;
use roster_core::types::DbId;

use crate::models::{Assignment, Developer, Project};

/// The complete persisted state: the two entity collections plus the
/// assignment registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub developers: Vec<Developer>,
    pub projects: Vec<Project>,
    pub assignments: Vec<Assignment>,
}

impl Snapshot {
    pub fn developer(&self, id: DbId) -> Option<&Developer> {
        self.developers.iter().find(|d| d.id == id)
    }

    pub fn developer_mut(&mut self, id: DbId) -> Option<&mut Developer> {
        self.developers.iter_mut().find(|d| d.id == id)
    }

    pub fn project(&self, id: DbId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: DbId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Next developer id: one past the maximum ever assigned, never a
    /// recycled one (soft-deleted records still occupy their id).
    pub fn next_developer_id(&self) -> DbId {
        self.developers.iter().map(|d| d.id).max().unwrap_or(0) + 1
    }

    pub fn next_project_id(&self) -> DbId {
        self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

/// Handle to the canonical collections. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Snapshot>,
    path: Option<PathBuf>,
}

impl Store {
    /// Volatile store with no snapshot file. Used by tests and by
    /// deployments that accept losing state on restart.
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(Snapshot::default()),
            path: None,
        }
    }

    /// Open a store backed by a snapshot file.
    ///
    /// A missing file starts empty; an unreadable or unparsable one is
    /// logged at WARN and also starts empty, so a corrupt snapshot never
    /// blocks startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = load_snapshot(&path);
        Self {
            inner: RwLock::new(snapshot),
            path: Some(path),
        }
    }

    /// Run a read-only closure against the current state.
    pub fn read<R>(&self, op: impl FnOnce(&Snapshot) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        op(&guard)
    }

    /// Run a mutation atomically: snapshot the state, apply the closure,
    /// persist. If the closure fails or the snapshot write fails, the
    /// pre-mutation state is restored and the error surfaces unchanged, so
    /// partial writes never become observable.
    pub fn mutate<R>(
        &self,
        op: impl FnOnce(&mut Snapshot) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.clone();
        let outcome = op(&mut guard).and_then(|value| {
            self.persist(&guard)?;
            Ok(value)
        });
        if outcome.is_err() {
            *guard = before;
        }
        outcome
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| CoreError::Storage(format!("serializing snapshot: {e}")))?;
        std::fs::write(path, json)
            .map_err(|e| CoreError::Storage(format!("writing {}: {e}", path.display())))
    }

    /// Populate any empty collection with the sample roster, mirroring the
    /// dashboard's first-run behaviour. Collections that already hold data
    /// are left untouched. Returns whether anything was seeded.
    pub fn seed_defaults(&self) -> Result<bool, CoreError> {
        self.mutate(|snapshot| {
            let mut seeded = false;
            if snapshot.developers.is_empty() {
                snapshot.developers = sample_developers();
                seeded = true;
            }
            if snapshot.projects.is_empty() {
                snapshot.projects = sample_projects();
                seeded = true;
            }
            if snapshot.assignments.is_empty() {
                snapshot.assignments = sample_assignments();
                seeded = true;
            }
            Ok(seeded)
        })
    }
}

fn load_snapshot(path: &Path) -> Snapshot {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Snapshot::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Snapshot unreadable, starting empty");
            return Snapshot::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Snapshot unparsable, starting empty");
            Snapshot::default()
        }
    }
}

fn ts(s: &str) -> roster_core::types::Timestamp {
    // Sample dates are compile-time constants; a parse failure here is a
    // programming error.
    format!("{s}T00:00:00Z").parse().expect("sample date")
}

fn sample_developers() -> Vec<Developer> {
    vec![
        Developer {
            id: 1,
            full_name: "Juan Pérez".to_string(),
            national_id: "12.345.678-5".to_string(),
            email: "juan.perez@email.com".to_string(),
            hire_date: ts("2023-01-15"),
            years_experience: 5,
            active: true,
        },
        Developer {
            id: 2,
            full_name: "María González".to_string(),
            national_id: "98.765.432-5".to_string(),
            email: "maria.gonzalez@email.com".to_string(),
            hire_date: ts("2022-06-10"),
            years_experience: 3,
            active: true,
        },
        Developer {
            id: 3,
            full_name: "Carlos López".to_string(),
            national_id: "11.223.344-K".to_string(),
            email: "carlos.lopez@email.com".to_string(),
            hire_date: ts("2021-03-20"),
            years_experience: 7,
            active: false,
        },
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Sistema ERP Empresarial".to_string(),
            start_date: ts("2024-01-15"),
            end_date: ts("2024-12-15"),
            active: true,
        },
        Project {
            id: 2,
            name: "App Mobile Banking".to_string(),
            start_date: ts("2024-03-01"),
            end_date: ts("2024-09-30"),
            active: true,
        },
        Project {
            id: 3,
            name: "Portal E-commerce".to_string(),
            start_date: ts("2023-06-10"),
            end_date: ts("2024-02-28"),
            active: false,
        },
    ]
}

fn sample_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            project_id: 1,
            developer_id: 1,
        },
        Assignment {
            project_id: 1,
            developer_id: 2,
        },
        Assignment {
            project_id: 2,
            developer_id: 2,
        },
    ]
}
