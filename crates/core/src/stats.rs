//! Derived statistics and views over progress and badge snapshots.
//!
//! Everything here is a pure projection: given the same input lists, the same
//! output comes back. Callers re-derive from the authoritative snapshot on
//! each render instead of caching.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{BadgeAward, ProgressRecord, ProgressStatus};

/// Shown when a duration cannot be computed (missing or non-positive).
pub const NO_DURATION: &str = "—";

/// Per-module rollup of a user's progress records.
///
/// `module_name` is always non-empty: records without a module name are
/// excluded from grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgressSummary {
    pub module_name: String,
    pub total_courses: u32,
    pub completed_courses: u32,
    pub percent_complete: u8,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-source and overall caps for the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLimits {
    pub max_badges: usize,
    pub max_completed: usize,
    pub max_started: usize,
    pub max_total: usize,
}

impl Default for ActivityLimits {
    fn default() -> Self {
        Self {
            max_badges: 3,
            max_completed: 5,
            max_started: 3,
            max_total: 10,
        }
    }
}

/// Number of records with the given status.
#[must_use]
pub fn count_by_status(records: &[ProgressRecord], status: ProgressStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}

/// Completed share of the whole record set, rounded to a whole percent.
///
/// Returns 0 for an empty set.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
pub fn percent_complete(records: &[ProgressRecord]) -> u8 {
    if records.is_empty() {
        return 0;
    }
    let completed = count_by_status(records, ProgressStatus::Completed);
    ((completed as f64 / records.len() as f64) * 100.0).round() as u8
}

/// Group records by module name and roll up completion per group.
///
/// Records without a module name are skipped. Groups are sorted descending by
/// percentage; ties keep the order in which the groups were first encountered.
#[must_use]
pub fn group_by_module(records: &[ProgressRecord]) -> Vec<ModuleProgressSummary> {
    let mut summaries: Vec<ModuleProgressSummary> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(name) = record.module_name.as_deref() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let index = *index_by_name.entry(name).or_insert_with(|| {
            summaries.push(ModuleProgressSummary {
                module_name: name.to_owned(),
                total_courses: 0,
                completed_courses: 0,
                percent_complete: 0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[index];
        summary.total_courses += 1;
        if record.status == ProgressStatus::Completed {
            summary.completed_courses += 1;
        }
    }

    for summary in &mut summaries {
        summary.percent_complete = whole_percent(summary.completed_courses, summary.total_courses);
    }

    // sort_by is stable, which gives us the tie-break for free.
    summaries.sort_by(|a, b| b.percent_complete.cmp(&a.percent_complete));
    summaries
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_percent(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(total)) * 100.0).round() as u8
}

/// Merge the most recent badge awards and progress events into one feed.
///
/// Progress records are ranked by most recent start before each per-source
/// truncation, so backend ordering cannot push a fresh event out of the feed.
/// Awards are truncated in the order given. Only the merged list is sorted
/// (descending by timestamp) and capped at `max_total`.
#[must_use]
pub fn recent_activity(
    records: &[ProgressRecord],
    awards: &[BadgeAward],
    limits: ActivityLimits,
) -> Vec<ActivityEntry> {
    let records = sort_by_recent_start(records);
    let mut entries: Vec<ActivityEntry> = Vec::new();

    for award in awards.iter().take(limits.max_badges) {
        entries.push(ActivityEntry {
            icon: badge_icon(award),
            title: format!("Badge earned: {}", award.badge.name),
            description: award.badge.description.clone(),
            timestamp: award.awarded_at,
        });
    }

    let completed = records
        .iter()
        .filter(|r| r.status == ProgressStatus::Completed && r.completed_at.is_some())
        .take(limits.max_completed);
    for record in completed {
        let Some(timestamp) = record.completed_at else {
            continue;
        };
        entries.push(ActivityEntry {
            icon: "✅".to_owned(),
            title: format!("Course completed: {}", record.course_title),
            description: module_label(record),
            timestamp,
        });
    }

    let started = records
        .iter()
        .filter(|r| r.status == ProgressStatus::InProgress && r.started_at.is_some())
        .take(limits.max_started);
    for record in started {
        let Some(timestamp) = record.started_at else {
            continue;
        };
        entries.push(ActivityEntry {
            icon: "📚".to_owned(),
            title: format!("Course started: {}", record.course_title),
            description: module_label(record),
            timestamp,
        });
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limits.max_total);
    entries
}

fn module_label(record: &ProgressRecord) -> String {
    format!("Module: {}", record.module_name.as_deref().unwrap_or("—"))
}

/// Pick a display icon for a badge award.
///
/// Well-known badge ids map to fixed emoji; otherwise the award's image field
/// is used when it holds a usable glyph/URL, with a generic medal fallback.
/// The backend has been seen sending "?" placeholders in the image field.
#[must_use]
pub fn badge_icon(award: &BadgeAward) -> String {
    let known = match award.badge.id.value() {
        1 => Some("🏆"),
        2 => Some("📚"),
        3 => Some("🎓"),
        4 => Some("🚀"),
        5 => Some("💯"),
        _ => None,
    };
    if let Some(icon) = known {
        return icon.to_owned();
    }

    let image = award.badge.image_url.as_str();
    if !image.is_empty() && image != "?" && image != "??" {
        return image.to_owned();
    }
    "🏅".to_owned()
}

/// Records sorted descending by start timestamp; records without one go last.
#[must_use]
pub fn sort_by_recent_start(records: &[ProgressRecord]) -> Vec<ProgressRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    sorted
}

/// Records matching the given status; `None` keeps everything.
#[must_use]
pub fn filter_by_status(
    records: &[ProgressRecord],
    status: Option<ProgressStatus>,
) -> Vec<ProgressRecord> {
    match status {
        None => records.to_vec(),
        Some(wanted) => records
            .iter()
            .filter(|r| r.status == wanted)
            .cloned()
            .collect(),
    }
}

/// Human label for the time between start and completion.
///
/// Returns [`NO_DURATION`] when either timestamp is absent or the duration is
/// non-positive; never a negative duration. Otherwise whole days, then
/// remaining whole hours, then remaining whole minutes.
#[must_use]
pub fn elapsed_label(
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
) -> String {
    let (Some(start), Some(end)) = (started_at, completed_at) else {
        return NO_DURATION.to_owned();
    };

    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return NO_DURATION.to_owned();
    }

    let days = millis / 86_400_000;
    let hours = (millis % 86_400_000) / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Badge, BadgeId, CourseId, ProgressId, UserId};
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    fn record(
        id: u64,
        module: Option<&str>,
        status: ProgressStatus,
        started_at: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> ProgressRecord {
        ProgressRecord {
            id: ProgressId::new(id),
            user_id: UserId::new(1),
            course_id: CourseId::new(id),
            course_title: format!("Course {id}"),
            module_id: None,
            module_name: module.map(str::to_owned),
            started_at,
            completed_at,
            status,
        }
    }

    fn award(badge_id: u64, name: &str, image: &str, awarded_at: DateTime<Utc>) -> BadgeAward {
        BadgeAward {
            badge: Badge {
                id: BadgeId::new(badge_id),
                name: name.to_owned(),
                description: format!("{name} badge"),
                image_url: image.to_owned(),
            },
            awarded_at,
        }
    }

    #[test]
    fn percent_complete_of_empty_set_is_zero() {
        assert_eq!(percent_complete(&[]), 0);
    }

    #[test]
    fn percent_complete_rounds_to_whole_percent() {
        let records = vec![
            record(1, None, ProgressStatus::Completed, None, None),
            record(2, None, ProgressStatus::InProgress, None, None),
        ];
        assert_eq!(percent_complete(&records), 50);

        let records = vec![
            record(1, None, ProgressStatus::Completed, None, None),
            record(2, None, ProgressStatus::InProgress, None, None),
            record(3, None, ProgressStatus::NotStarted, None, None),
        ];
        // 1/3 rounds to 33.
        assert_eq!(percent_complete(&records), 33);
    }

    #[test]
    fn statuses_partition_the_record_set() {
        let records = vec![
            record(1, None, ProgressStatus::Completed, None, None),
            record(2, None, ProgressStatus::InProgress, None, None),
            record(3, None, ProgressStatus::NotStarted, None, None),
            record(4, None, ProgressStatus::InProgress, None, None),
        ];
        let total = count_by_status(&records, ProgressStatus::Completed)
            + count_by_status(&records, ProgressStatus::InProgress)
            + count_by_status(&records, ProgressStatus::NotStarted);
        assert_eq!(total, records.len());
    }

    #[test]
    fn group_by_module_orders_by_descending_percentage() {
        let records = vec![
            record(1, Some("A"), ProgressStatus::Completed, None, None),
            record(2, Some("A"), ProgressStatus::InProgress, None, None),
            record(3, Some("B"), ProgressStatus::Completed, None, None),
        ];
        let summaries = group_by_module(&records);
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].module_name, "B");
        assert_eq!(summaries[0].total_courses, 1);
        assert_eq!(summaries[0].completed_courses, 1);
        assert_eq!(summaries[0].percent_complete, 100);

        assert_eq!(summaries[1].module_name, "A");
        assert_eq!(summaries[1].total_courses, 2);
        assert_eq!(summaries[1].completed_courses, 1);
        assert_eq!(summaries[1].percent_complete, 50);
    }

    #[test]
    fn group_by_module_skips_unnamed_records() {
        let records = vec![
            record(1, None, ProgressStatus::Completed, None, None),
            record(2, Some(""), ProgressStatus::Completed, None, None),
            record(3, Some("A"), ProgressStatus::InProgress, None, None),
        ];
        let summaries = group_by_module(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].module_name, "A");
        assert!(summaries.iter().all(|s| !s.module_name.is_empty()));
    }

    #[test]
    fn group_by_module_ties_keep_first_encounter_order() {
        let records = vec![
            record(1, Some("Zeta"), ProgressStatus::Completed, None, None),
            record(2, Some("Alpha"), ProgressStatus::Completed, None, None),
        ];
        let summaries = group_by_module(&records);
        assert_eq!(summaries[0].module_name, "Zeta");
        assert_eq!(summaries[1].module_name, "Alpha");
    }

    #[test]
    fn recent_activity_is_sorted_descending_and_capped() {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut records = Vec::new();
        for i in 0..8 {
            let ts = base + chrono::Duration::hours(i);
            records.push(record(
                i as u64,
                Some("A"),
                ProgressStatus::Completed,
                Some(ts - chrono::Duration::days(1)),
                Some(ts),
            ));
        }
        for i in 8..14 {
            let ts = base + chrono::Duration::hours(i);
            records.push(record(
                i as u64,
                Some("A"),
                ProgressStatus::InProgress,
                Some(ts),
                None,
            ));
        }
        let awards = vec![
            award(1, "First", "", base + chrono::Duration::days(2)),
            award(2, "Second", "", base + chrono::Duration::days(3)),
            award(3, "Third", "", base + chrono::Duration::days(1)),
            award(4, "Fourth", "", base + chrono::Duration::days(4)),
        ];

        let feed = recent_activity(&records, &awards, ActivityLimits::default());
        assert!(feed.len() <= 10);
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        // Per-source truncation happens before the merge: only the first three
        // awards are eligible, so "Fourth" never appears even though it is the
        // most recent event overall.
        assert!(!feed.iter().any(|e| e.title.contains("Fourth")));
        assert!(feed.iter().any(|e| e.title.contains("Second")));
    }

    #[test]
    fn recent_activity_keeps_the_newest_completions_regardless_of_input_order() {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        // Backend order is oldest-first, so the freshest completion comes last.
        let mut records = Vec::new();
        for i in 0..6u64 {
            let started = base + chrono::Duration::days(i as i64);
            records.push(record(
                i,
                Some("A"),
                ProgressStatus::Completed,
                Some(started),
                Some(started + chrono::Duration::hours(1)),
            ));
        }

        let feed = recent_activity(&records, &[], ActivityLimits::default());
        assert_eq!(feed.len(), 5);
        assert!(feed.iter().any(|e| e.title == "Course completed: Course 5"));
        assert!(!feed.iter().any(|e| e.title == "Course completed: Course 0"));
    }

    #[test]
    fn recent_activity_ignores_records_without_timestamps() {
        let records = vec![
            record(1, Some("A"), ProgressStatus::Completed, None, None),
            record(2, Some("A"), ProgressStatus::InProgress, None, None),
        ];
        let feed = recent_activity(&records, &[], ActivityLimits::default());
        assert!(feed.is_empty());
    }

    #[test]
    fn badge_icon_prefers_known_ids() {
        let a = award(1, "Finisher", "https://img.example/x.png", fixed());
        assert_eq!(badge_icon(&a), "🏆");
    }

    #[test]
    fn badge_icon_skips_placeholder_images() {
        let a = award(99, "Custom", "??", fixed());
        assert_eq!(badge_icon(&a), "🏅");
        let a = award(99, "Custom", "⭐", fixed());
        assert_eq!(badge_icon(&a), "⭐");
    }

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn elapsed_label_formats_days_and_hours() {
        assert_eq!(
            elapsed_label(
                Some(at("2024-01-01T00:00:00Z")),
                Some(at("2024-01-03T05:00:00Z")),
            ),
            "2d 5h"
        );
    }

    #[test]
    fn elapsed_label_formats_hours_and_minutes() {
        assert_eq!(
            elapsed_label(
                Some(at("2024-01-01T00:00:00Z")),
                Some(at("2024-01-01T03:20:00Z")),
            ),
            "3h 20m"
        );
    }

    #[test]
    fn elapsed_label_formats_minutes_only() {
        assert_eq!(
            elapsed_label(
                Some(at("2024-01-01T00:00:00Z")),
                Some(at("2024-01-01T00:45:00Z")),
            ),
            "45m"
        );
    }

    #[test]
    fn elapsed_label_sentinel_for_non_positive_duration() {
        let t = at("2024-01-01T00:00:00Z");
        assert_eq!(elapsed_label(Some(t), Some(t)), NO_DURATION);
        assert_eq!(
            elapsed_label(Some(t), Some(at("2023-12-31T00:00:00Z"))),
            NO_DURATION
        );
    }

    #[test]
    fn elapsed_label_sentinel_for_missing_timestamps() {
        let t = at("2024-01-01T00:00:00Z");
        assert_eq!(elapsed_label(None, Some(t)), NO_DURATION);
        assert_eq!(elapsed_label(Some(t), None), NO_DURATION);
    }

    #[test]
    fn sort_by_recent_start_puts_missing_starts_last() {
        let records = vec![
            record(1, None, ProgressStatus::InProgress, None, None),
            record(
                2,
                None,
                ProgressStatus::InProgress,
                Some(at("2024-01-02T00:00:00Z")),
                None,
            ),
            record(
                3,
                None,
                ProgressStatus::InProgress,
                Some(at("2024-01-05T00:00:00Z")),
                None,
            ),
        ];
        let sorted = sort_by_recent_start(&records);
        assert_eq!(sorted[0].id, ProgressId::new(3));
        assert_eq!(sorted[1].id, ProgressId::new(2));
        assert_eq!(sorted[2].id, ProgressId::new(1));
    }

    #[test]
    fn filter_by_status_none_keeps_everything() {
        let records = vec![
            record(1, None, ProgressStatus::Completed, None, None),
            record(2, None, ProgressStatus::InProgress, None, None),
        ];
        assert_eq!(filter_by_status(&records, None).len(), 2);
        let completed = filter_by_status(&records, Some(ProgressStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, ProgressId::new(1));
    }
}
