use dioxus::prelude::*;
use dioxus_router::use_navigator;

use aula_core::model::{Course, CourseDraft, CourseId, Module, ModuleId};
use services::CatalogServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct AdminData {
    modules: Vec<Module>,
    courses: Vec<Course>,
}

#[component]
pub fn AdminCoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Admin-only surface. Non-admins get bounced to Home, not Login.
    let is_admin = ctx.auth().is_admin();
    use_effect(move || {
        if !is_admin {
            navigator.replace(Route::Home {});
        }
    });
    if !is_admin {
        return rsx! {};
    }

    let catalog = ctx.catalog();
    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let modules = catalog
                .list_modules()
                .await
                .map_err(ViewError::from)?;
            let courses = catalog
                .list_courses()
                .await
                .map_err(ViewError::from)?;
            Ok(AdminData { modules, courses })
        }
    });

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut content_url = use_signal(String::new);
    let mut module_id = use_signal(|| Option::<ModuleId>::None);
    let mut active = use_signal(|| true);
    let mut editing = use_signal(|| Option::<CourseId>::None);

    let mut clear_form = move || {
        title.set(String::new());
        description.set(String::new());
        content_url.set(String::new());
        module_id.set(None);
        active.set(true);
        editing.set(None);
    };

    let submit = {
        let ctx = ctx.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = CourseDraft {
                title: title().trim().to_string(),
                description: description().trim().to_string(),
                content_url: content_url().trim().to_string(),
                module_id: module_id(),
                active: active(),
            };

            let catalog = ctx.catalog();
            let toasts = ctx.toasts();
            let target = editing();
            spawn(async move {
                let outcome = match target {
                    Some(id) => catalog.update_course(id, &draft).await,
                    None => catalog.create_course(&draft).await,
                };
                match outcome {
                    Ok(course) => {
                        let verb = if target.is_some() { "updated" } else { "created" };
                        toasts.success(format!("Course \"{}\" {verb}.", course.title));
                        clear_form();
                        resource.restart();
                    }
                    Err(CatalogServiceError::Validation(err)) => {
                        toasts.error(err.to_string());
                    }
                    Err(CatalogServiceError::Api(err)) => {
                        toasts.error(err.user_message());
                    }
                    Err(err) => {
                        toasts.error(err.to_string());
                    }
                }
            });
        }
    };

    let delete_course = {
        let ctx = ctx.clone();
        move |id: CourseId, course_title: String| {
            let confirms = ctx.confirms();
            let catalog = ctx.catalog();
            let toasts = ctx.toasts();
            spawn(async move {
                let accepted = confirms
                    .danger(
                        &format!("Delete \"{course_title}\"? This cannot be undone."),
                        "Delete course",
                    )
                    .await;
                if !accepted {
                    return;
                }
                match catalog.delete_course(id).await {
                    Ok(()) => {
                        toasts.success(format!("Course \"{course_title}\" deleted."));
                        resource.restart();
                    }
                    Err(CatalogServiceError::Api(err)) => {
                        toasts.error(err.user_message());
                    }
                    Err(err) => {
                        toasts.error(err.to_string());
                    }
                }
            });
        }
    };

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page admin-page",
            h2 { "Manage Courses" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    form { class: "course-form", onsubmit: submit.clone(),
                        h3 {
                            if editing().is_some() { "Edit course" } else { "New course" }
                        }
                        label { r#for: "course-title", "Title" }
                        input {
                            id: "course-title",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                        label { r#for: "course-description", "Description" }
                        textarea {
                            id: "course-description",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                        label { r#for: "course-url", "Content URL (optional)" }
                        input {
                            id: "course-url",
                            value: "{content_url}",
                            oninput: move |evt| content_url.set(evt.value()),
                        }
                        label { r#for: "course-module", "Module" }
                        select {
                            id: "course-module",
                            onchange: move |evt| {
                                module_id.set(evt.value().parse::<u64>().ok().map(ModuleId::new));
                            },
                            option { value: "", selected: module_id().is_none(), "Select a module" }
                            for module in &data.modules {
                                option {
                                    value: "{module.id.value()}",
                                    selected: module_id() == Some(module.id),
                                    "{module.name}"
                                }
                            }
                        }
                        label { class: "checkbox-label",
                            input {
                                r#type: "checkbox",
                                checked: active(),
                                onchange: move |evt| active.set(evt.checked()),
                            }
                            "Active"
                        }
                        div { class: "form-actions",
                            button { class: "btn btn-primary", r#type: "submit",
                                if editing().is_some() { "Save changes" } else { "Create course" }
                            }
                            if editing().is_some() {
                                button {
                                    class: "btn",
                                    r#type: "button",
                                    onclick: move |_| clear_form(),
                                    "Cancel"
                                }
                            }
                        }
                    }

                    h3 { "Courses" }
                    if data.courses.is_empty() {
                        p { "No courses yet." }
                    } else {
                        table { class: "admin-table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Module" }
                                    th { "Active" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for course in data.courses {
                                    tr { key: "{course.id}",
                                        td { "{course.title}" }
                                        td { "{course.module_name}" }
                                        td {
                                            if course.active { "Yes" } else { "No" }
                                        }
                                        td { class: "row-actions",
                                            button {
                                                class: "btn btn-small",
                                                r#type: "button",
                                                onclick: {
                                                    let course = course.clone();
                                                    move |_| {
                                                        title.set(course.title.clone());
                                                        description.set(course.description.clone());
                                                        content_url.set(
                                                            course
                                                                .content_url
                                                                .as_ref()
                                                                .map(ToString::to_string)
                                                                .unwrap_or_default(),
                                                        );
                                                        module_id.set(Some(course.module_id));
                                                        active.set(course.active);
                                                        editing.set(Some(course.id));
                                                    }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-small btn-danger",
                                                r#type: "button",
                                                onclick: {
                                                    let delete_course = delete_course.clone();
                                                    let id = course.id;
                                                    let course_title = course.title.clone();
                                                    move |_| delete_course(id, course_title.clone())
                                                },
                                                "Delete"
                                            }
                                        }
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
