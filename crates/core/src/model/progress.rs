use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, ModuleId, ProgressId, UserId};

/// Lifecycle status of one user's relationship to one course.
///
/// Every record carries exactly one status, so the three variants partition
/// any record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// One user's progress on one course.
///
/// The backend owns this record; the client holds a read-only snapshot per
/// page load, refreshed after mutating calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: ProgressId,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub course_title: String,
    pub module_id: Option<ModuleId>,
    pub module_name: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: ProgressStatus,
}
