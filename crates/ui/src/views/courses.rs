use dioxus::prelude::*;

use aula_core::model::{Course, CourseId, ModuleId, ProgressId, ProgressStatus, UserId};
use services::ProgressServiceError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct CourseRow {
    course: Course,
    status: Option<ProgressStatus>,
    progress_id: Option<ProgressId>,
}

#[derive(Clone, Debug, PartialEq)]
struct CoursesData {
    module_name: String,
    rows: Vec<CourseRow>,
}

#[component]
pub fn CoursesView(module_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let module_id = ModuleId::new(module_id);
    let user_id = ctx.auth().current_user().map(|u| u.id);

    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress.clone();
        async move {
            let Some(user_id) = user_id else {
                return Err(ViewError::Unknown);
            };
            let courses = catalog
                .list_courses_by_module(module_id)
                .await
                .map_err(ViewError::from)?;
            let records = progress
                .list_for_user(user_id)
                .await
                .map_err(ViewError::from)?;

            let module_name = courses
                .first()
                .map(|c| c.module_name.clone())
                .unwrap_or_default();
            let rows = courses
                .into_iter()
                .map(|course| {
                    let record = records.iter().find(|r| r.course_id == course.id);
                    CourseRow {
                        status: record.map(|r| r.status),
                        progress_id: record.map(|r| r.id),
                        course,
                    }
                })
                .collect();
            Ok(CoursesData { module_name, rows })
        }
    });

    let state = view_state_from_resource(&resource);

    let start_course = {
        let ctx = ctx.clone();
        move |course_id: CourseId, title: String| {
            let Some(user_id) = user_id else { return };
            let progress = ctx.progress();
            let toasts = ctx.toasts();
            spawn(async move {
                match progress.start_course(user_id, course_id).await {
                    Ok(_) => {
                        toasts.success(format!("Enrolled in {title}."));
                        resource.restart();
                    }
                    Err(ProgressServiceError::AlreadyInProgress) => {
                        toasts.info("You are already taking this course.");
                    }
                    Err(ProgressServiceError::AlreadyCompleted) => {
                        toasts.info("You have already completed this course.");
                    }
                    Err(ProgressServiceError::Api(err)) => {
                        toasts.error(err.user_message());
                    }
                    Err(err) => {
                        toasts.error(err.to_string());
                    }
                }
            });
        }
    };

    let complete_course = {
        let ctx = ctx.clone();
        move |progress_id: ProgressId, title: String| {
            let confirms = ctx.confirms();
            let progress = ctx.progress();
            let toasts = ctx.toasts();
            spawn(async move {
                let accepted = confirms
                    .confirm(
                        &format!("Mark \"{title}\" as completed?"),
                        "Complete course",
                    )
                    .await;
                if !accepted {
                    return;
                }
                match progress.complete_course(progress_id).await {
                    Ok(_) => {
                        toasts.success(format!("Completed {title}. Nice work!"));
                        resource.restart();
                    }
                    Err(err) => {
                        toasts.error(match err {
                            ProgressServiceError::Api(api) => api.user_message(),
                            other => other.to_string(),
                        });
                    }
                }
            });
        }
    };

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
                    h2 {
                        if data.module_name.is_empty() {
                            "Courses"
                        } else {
                            "{data.module_name}"
                        }
                    }
                    if data.rows.is_empty() {
                        p { "This module has no courses yet." }
                    } else {
                        div { class: "course-grid",
                            for row in data.rows {
                                CourseCard {
                                    key: "{row.course.id}",
                                    row: row.clone(),
                                    on_start: {
                                        let start_course = start_course.clone();
                                        let id = row.course.id;
                                        let title = row.course.title.clone();
                                        move |()| start_course(id, title.clone())
                                    },
                                    on_complete: {
                                        let complete_course = complete_course.clone();
                                        let progress_id = row.progress_id;
                                        let title = row.course.title.clone();
                                        move |()| {
                                            if let Some(progress_id) = progress_id {
                                                complete_course(progress_id, title.clone());
                                            }
                                        }
                                    },
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

#[derive(Props, Clone, PartialEq)]
struct CourseCardProps {
    row: CourseRow,
    on_start: Callback<()>,
    on_complete: Callback<()>,
}

#[component]
fn CourseCard(props: CourseCardProps) -> Element {
    let row = props.row;
    let on_start = props.on_start;
    let on_complete = props.on_complete;
    let course = row.course;

    rsx! {
        div { class: "course-card",
            h3 { "{course.title}" }
            p { "{course.description}" }
            if let Some(url) = &course.content_url {
                a { class: "course-content", href: "{url}", target: "_blank", "Open content" }
            }
            div { class: "course-actions",
                match row.status {
                    Some(ProgressStatus::Completed) => rsx! {
                        span { class: "status-completed", "Completed ✅" }
                    },
                    Some(ProgressStatus::InProgress) => rsx! {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_complete.call(()),
                            "Mark completed"
                        }
                    },
                    Some(ProgressStatus::NotStarted) | None => rsx! {
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| on_start.call(()),
                            "Start course"
                        }
                    },
                }
            }
        }
    }
}
