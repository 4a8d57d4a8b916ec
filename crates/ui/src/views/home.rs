use dioxus::prelude::*;
use dioxus_router::Link;

use aula_core::model::{ProgressRecord, ProgressStatus};
use aula_core::stats::{count_by_status, percent_complete, sort_by_recent_start};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    name: String,
    completed: usize,
    in_progress: usize,
    percent: u8,
    recent: Vec<ProgressRecord>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let user = ctx.auth().current_user();

    let resource = use_resource(move || {
        let progress = progress.clone();
        let user = user.clone();
        async move {
            let Some(user) = user else {
                return Err(ViewError::Unknown);
            };
            let records = progress
                .list_for_user(user.id)
                .await
                .map_err(ViewError::from)?;

            let recent: Vec<ProgressRecord> = sort_by_recent_start(&records)
                .into_iter()
                .filter(|r| r.status == ProgressStatus::InProgress)
                .take(3)
                .collect();

            Ok(HomeData {
                name: user.name,
                completed: count_by_status(&records, ProgressStatus::Completed),
                in_progress: count_by_status(&records, ProgressStatus::InProgress),
                percent: percent_complete(&records),
                recent,
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    h2 { "Welcome, {data.name}" }
                    div { class: "stat-cards",
                        div { class: "stat-card",
                            span { class: "stat-value", "{data.completed}" }
                            span { class: "stat-label", "Courses completed" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{data.in_progress}" }
                            span { class: "stat-label", "In progress" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{data.percent}%" }
                            span { class: "stat-label", "Overall completion" }
                        }
                    }

                    h3 { "Continue learning" }
                    if data.recent.is_empty() {
                        p {
                            "Nothing in progress yet. "
                            Link { to: Route::Modules {}, "Browse the modules" }
                            " to get started."
                        }
                    } else {
                        ul { class: "course-list",
                            for record in data.recent {
                                li { key: "{record.id}",
                                    if let Some(module_id) = record.module_id {
                                        Link {
                                            class: "course-link",
                                            to: Route::Courses { module_id: module_id.value() },
                                            "{record.course_title}"
                                        }
                                    } else {
                                        span { class: "course-title", "{record.course_title}" }
                                    }
                                    if let Some(module) = record.module_name {
                                        span { class: "course-module", " · {module}" }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
