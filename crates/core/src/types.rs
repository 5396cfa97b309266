/// Entity ids are sequential 64-bit integers assigned by the repositories
/// (max existing id + 1, never recycled).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
