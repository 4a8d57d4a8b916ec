use aula_core::model::{BadgeAward, ProgressRecord, ProgressStatus};
use aula_core::stats::{ActivityEntry, NO_DURATION, elapsed_label};

use crate::vm::time_fmt::{format_date, format_datetime};

/// One row of the profile's progress table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRowVm {
    pub course_title: String,
    pub module_name: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub started_at_str: String,
    pub elapsed_str: String,
}

impl From<&ProgressRecord> for ProgressRowVm {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            course_title: record.course_title.clone(),
            module_name: record
                .module_name
                .clone()
                .unwrap_or_else(|| NO_DURATION.to_owned()),
            status_label: status_label(record.status),
            status_class: status_class(record.status),
            started_at_str: record
                .started_at
                .map_or_else(|| NO_DURATION.to_owned(), format_date),
            elapsed_str: elapsed_label(record.started_at, record.completed_at),
        }
    }
}

#[must_use]
pub fn map_progress_rows(records: &[ProgressRecord]) -> Vec<ProgressRowVm> {
    records.iter().map(ProgressRowVm::from).collect()
}

/// One row of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub timestamp_str: String,
}

impl From<&ActivityEntry> for ActivityVm {
    fn from(entry: &ActivityEntry) -> Self {
        Self {
            icon: entry.icon.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            timestamp_str: format_datetime(entry.timestamp),
        }
    }
}

#[must_use]
pub fn map_activity(entries: &[ActivityEntry]) -> Vec<ActivityVm> {
    entries.iter().map(ActivityVm::from).collect()
}

/// One badge card on the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeCardVm {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub awarded_at_str: String,
}

#[must_use]
pub fn map_badge_cards(awards: &[BadgeAward]) -> Vec<BadgeCardVm> {
    awards
        .iter()
        .map(|award| BadgeCardVm {
            icon: aula_core::stats::badge_icon(award),
            name: award.badge.name.clone(),
            description: award.badge.description.clone(),
            awarded_at_str: format_date(award.awarded_at),
        })
        .collect()
}

#[must_use]
pub fn status_label(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::NotStarted => "Not started",
        ProgressStatus::InProgress => "In progress",
        ProgressStatus::Completed => "Completed",
    }
}

#[must_use]
pub fn status_class(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::NotStarted => "status-not-started",
        ProgressStatus::InProgress => "status-in-progress",
        ProgressStatus::Completed => "status-completed",
    }
}
