use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::AppContext;
use crate::views::{
    AdminCoursesView, CoursesView, HomeView, LoginView, ModulesView, ProfileView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/modules", ModulesView)] Modules {},
        #[route("/modules/:module_id", CoursesView)] Courses { module_id: u64 },
        #[route("/profile", ProfileView)] Profile {},
        #[route("/admin/courses", AdminCoursesView)] AdminCourses {},
}

/// Where to send the user after a successful login. Set by the guard when it
/// bounces an unauthenticated request, consumed by the login view.
#[derive(Clone, Copy)]
pub struct ReturnTo(pub Signal<Option<Route>>);

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let return_to = use_context::<ReturnTo>();
    let mut return_slot = return_to.0;

    // Route guard: every view under this layout requires a session.
    let authenticated = ctx.auth().is_authenticated();
    use_effect(move || {
        if !authenticated {
            return_slot.set(Some(route.clone()));
            navigator.replace(Route::Login {});
        }
    });
    if !authenticated {
        return rsx! {};
    }

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let user = ctx.auth().current_user();
    let is_admin = ctx.auth().is_admin();

    rsx! {
        nav { class: "navbar",
            h1 { "Aula" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Modules {}, "Modules" } }
                li { Link { to: Route::Profile {}, "My Profile" } }
                if is_admin {
                    li { Link { to: Route::AdminCourses {}, "Manage Courses" } }
                }
            }
            div { class: "navbar-session",
                if let Some(user) = user {
                    span { class: "navbar-user", "{user.name}" }
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        ctx.auth().logout();
                        navigator.replace(Route::Login {});
                    },
                    "Log out"
                }
            }
        }
    }
}
