//! Derived project lifecycle status.
//!
//! Recomputed on every read, never stored. The inactive check runs first:
//! a deactivated project reports `Inactive` even when its dates would put
//! it in progress.

use serde::Serialize;

use crate::types::Timestamp;

/// Lifecycle status of a project at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    /// Soft-deleted; overrides every date-based state.
    Inactive,
    /// `now` is before the start date.
    NotStarted,
    /// Start and end dates bracket `now`.
    InProgress,
    /// `now` is past the end date. Also reported for records whose date
    /// range is invalid (end before start), so stale data degrades to a
    /// terminal state instead of an impossible one.
    Completed,
}

/// Compute the status of a project from its active flag and date range.
pub fn project_status(
    active: bool,
    start_date: Timestamp,
    end_date: Timestamp,
    now: Timestamp,
) -> ProjectStatus {
    if !active {
        ProjectStatus::Inactive
    } else if now < start_date {
        ProjectStatus::NotStarted
    } else if now > end_date {
        ProjectStatus::Completed
    } else {
        ProjectStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        format!("{s}T00:00:00Z").parse().unwrap()
    }

    #[test]
    fn inactive_overrides_dates() {
        // Dates say in-progress; the flag wins.
        let status = project_status(false, ts("2024-01-01"), ts("2024-12-31"), ts("2024-06-01"));
        assert_eq!(status, ProjectStatus::Inactive);
    }

    #[test]
    fn not_started_before_start_date() {
        let status = project_status(true, ts("2024-06-01"), ts("2024-12-31"), ts("2024-01-01"));
        assert_eq!(status, ProjectStatus::NotStarted);
    }

    #[test]
    fn in_progress_between_dates() {
        let status = project_status(true, ts("2024-01-01"), ts("2024-12-31"), ts("2024-06-01"));
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn in_progress_on_boundaries() {
        let start = ts("2024-01-01");
        let end = ts("2024-12-31");
        assert_eq!(project_status(true, start, end, start), ProjectStatus::InProgress);
        assert_eq!(project_status(true, start, end, end), ProjectStatus::InProgress);
    }

    #[test]
    fn completed_after_end_date() {
        let status = project_status(true, ts("2024-01-01"), ts("2024-06-01"), ts("2024-12-31"));
        assert_eq!(status, ProjectStatus::Completed);
    }

    #[test]
    fn invalid_range_in_the_past_degrades_to_completed() {
        // end < start and both in the past: treat as finished.
        let status = project_status(true, ts("2024-06-01"), ts("2024-01-01"), ts("2024-12-31"));
        assert_eq!(status, ProjectStatus::Completed);
    }
}
