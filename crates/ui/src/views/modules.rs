use dioxus::prelude::*;
use dioxus_router::Link;

use aula_core::model::Module;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn ModulesView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let modules: Vec<Module> = catalog
                .list_modules()
                .await
                .map_err(ViewError::from)?;
            Ok(modules)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Modules" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(modules) => rsx! {
                    if modules.is_empty() {
                        p { "No modules available yet." }
                    } else {
                        div { class: "module-grid",
                            for module in modules {
                                Link {
                                    key: "{module.id}",
                                    class: "module-card",
                                    to: Route::Courses { module_id: module.id.value() },
                                    h3 { "{module.name}" }
                                    p { "{module.description}" }
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
