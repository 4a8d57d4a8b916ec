use dioxus::prelude::*;

use aula_core::model::{BadgeAward, ProgressRecord, ProgressStatus};
use aula_core::stats::{
    ActivityLimits, count_by_status, filter_by_status, group_by_module, percent_complete,
    recent_activity, sort_by_recent_start,
};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_activity, map_badge_cards, map_progress_rows, status_label};

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let user = ctx.auth().current_user();
    let user_id = user.as_ref().map(|u| u.id);

    // Progress and badges load independently so one failing backend call
    // does not blank the whole page.
    let progress = ctx.progress();
    let progress_resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let Some(user_id) = user_id else {
                return Err(ViewError::Unknown);
            };
            let records: Vec<ProgressRecord> = progress
                .list_for_user(user_id)
                .await
                .map_err(ViewError::from)?;
            Ok(records)
        }
    });

    let badges = ctx.badges();
    let badges_resource = use_resource(move || {
        let badges = badges.clone();
        async move {
            let Some(user_id) = user_id else {
                return Err(ViewError::Unknown);
            };
            let awards: Vec<BadgeAward> = badges
                .list_awards_for_user(user_id)
                .await
                .map_err(|err| ViewError::backend(err.user_message()))?;
            Ok(awards)
        }
    });

    let mut status_filter = use_signal(|| Option::<ProgressStatus>::None);

    let progress_state = view_state_from_resource(&progress_resource);
    let badges_state = view_state_from_resource(&badges_resource);

    // The activity feed needs both sources; missing badges degrade to an
    // empty award list instead of hiding the feed.
    let awards_for_feed = match &badges_state {
        ViewState::Ready(awards) => awards.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div { class: "page profile-page",
            h2 { "My Profile" }
            if let Some(user) = &user {
                div { class: "profile-header",
                    span { class: "avatar", "{user.initial()}" }
                    div {
                        p { class: "profile-name", "{user.name}" }
                        p { class: "profile-email", "{user.email}" }
                    }
                }
            }

            match progress_state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading progress..." }
                },
                ViewState::Ready(records) => {
                    let percent = percent_complete(&records);
                    let completed = count_by_status(&records, ProgressStatus::Completed);
                    let in_progress = count_by_status(&records, ProgressStatus::InProgress);
                    let modules = group_by_module(&records);
                    let sorted = sort_by_recent_start(&records);
                    let rows = map_progress_rows(&filter_by_status(&sorted, status_filter()));
                    let feed = map_activity(&recent_activity(
                        &records,
                        &awards_for_feed,
                        ActivityLimits::default(),
                    ));

                    rsx! {
                        section { class: "profile-stats",
                            div { class: "stat-card",
                                span { class: "stat-value", "{percent}%" }
                                span { class: "stat-label", "Complete" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-value", "{completed}" }
                                span { class: "stat-label", "Completed" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-value", "{in_progress}" }
                                span { class: "stat-label", "In progress" }
                            }
                        }

                        section { class: "module-progress",
                            h3 { "Progress by module" }
                            if modules.is_empty() {
                                p { "No module progress yet." }
                            } else {
                                for summary in modules {
                                    div { class: "module-row", key: "{summary.module_name}",
                                        span { class: "module-name", "{summary.module_name}" }
                                        div { class: "progress-bar",
                                            div {
                                                class: "progress-fill",
                                                style: "width: {summary.percent_complete}%",
                                            }
                                        }
                                        span { class: "module-pct",
                                            "{summary.completed_courses}/{summary.total_courses} ({summary.percent_complete}%)"
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "progress-table",
                            h3 { "My courses" }
                            select {
                                class: "status-filter",
                                onchange: move |evt| {
                                    status_filter.set(match evt.value().as_str() {
                                        "not-started" => Some(ProgressStatus::NotStarted),
                                        "in-progress" => Some(ProgressStatus::InProgress),
                                        "completed" => Some(ProgressStatus::Completed),
                                        _ => None,
                                    });
                                },
                                option { value: "all", "All" }
                                option { value: "not-started", {status_label(ProgressStatus::NotStarted)} }
                                option { value: "in-progress", {status_label(ProgressStatus::InProgress)} }
                                option { value: "completed", {status_label(ProgressStatus::Completed)} }
                            }
                            if rows.is_empty() {
                                p { "No courses match this filter." }
                            } else {
                                table {
                                    thead {
                                        tr {
                                            th { "Course" }
                                            th { "Module" }
                                            th { "Status" }
                                            th { "Started" }
                                            th { "Time spent" }
                                        }
                                    }
                                    tbody {
                                        for row in rows {
                                            tr { key: "{row.course_title}",
                                                td { "{row.course_title}" }
                                                td { "{row.module_name}" }
                                                td {
                                                    span { class: "{row.status_class}", "{row.status_label}" }
                                                }
                                                td { "{row.started_at_str}" }
                                                td { "{row.elapsed_str}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "activity-feed",
                            h3 { "Recent activity" }
                            if feed.is_empty() {
                                p { "No recent activity." }
                            } else {
                                ul {
                                    for entry in feed {
                                        li { key: "{entry.title}-{entry.timestamp_str}",
                                            span { class: "activity-icon", "{entry.icon}" }
                                            div { class: "activity-body",
                                                p { class: "activity-title", "{entry.title}" }
                                                p { class: "activity-desc", "{entry.description}" }
                                                span { class: "activity-time", "{entry.timestamp_str}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            section { class: "badges",
                h3 { "Badges" }
                match badges_state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading badges..." }
                    },
                    ViewState::Ready(awards) => {
                        let cards = map_badge_cards(&awards);
                        rsx! {
                            if cards.is_empty() {
                                p { "No badges yet. Complete courses to earn them." }
                            } else {
                                div { class: "badge-grid",
                                    for card in cards {
                                        div { class: "badge-card", key: "{card.name}",
                                            span { class: "badge-icon", "{card.icon}" }
                                            p { class: "badge-name", "{card.name}" }
                                            p { class: "badge-desc", "{card.description}" }
                                            span { class: "badge-date", "{card.awarded_at_str}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    ViewState::Error(_) => rsx! {
                        p { "Badges are unavailable right now." }
                    },
                }
            }
        }
    }
}
