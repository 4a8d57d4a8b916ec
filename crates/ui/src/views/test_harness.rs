use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::InMemoryApi;
use aula_core::Clock;
use aula_core::model::{Role, SessionUser, UserId};
use aula_core::time::fixed_now;
use services::{
    AuthService, BadgeService, CatalogService, ConfirmService, ProgressService, ToastService,
};

use crate::components::{ConfirmHost, ToastHost};
use crate::context::{UiApp, build_app_context};
use crate::routes::ReturnTo;
use crate::views::{
    AdminCoursesView, CoursesView, HomeView, LoginView, ModulesView, ProfileView,
};

#[derive(Clone)]
struct TestApp {
    auth: Arc<AuthService>,
    toasts: Arc<ToastService>,
    confirms: Arc<ConfirmService>,
    progress: Arc<ProgressService>,
    catalog: Arc<CatalogService>,
    badges: Arc<BadgeService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn toasts(&self) -> Arc<ToastService> {
        Arc::clone(&self.toasts)
    }

    fn confirms(&self) -> Arc<ConfirmService> {
        Arc::clone(&self.confirms)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn badges(&self) -> Arc<BadgeService> {
        Arc::clone(&self.badges)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Home,
    Modules,
    Courses(u64),
    Profile,
    AdminCourses,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let return_to = use_signal(|| None);
    use_context_provider(|| ReturnTo(return_to));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    rsx! {
        match view {
            ViewKind::Login => rsx! { LoginView {} },
            ViewKind::Home => rsx! { HomeView {} },
            ViewKind::Modules => rsx! { ModulesView {} },
            ViewKind::Courses(module_id) => rsx! { CoursesView { module_id } },
            ViewKind::Profile => rsx! { ProfileView {} },
            ViewKind::AdminCourses => rsx! { AdminCoursesView {} },
        }
        ToastHost {}
        ConfirmHost {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<InMemoryApi>,
    pub user_id: UserId,
    pub toasts: Arc<ToastService>,
    pub confirms: Arc<ConfirmService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_user(role: Role) -> SessionUser {
    SessionUser {
        id: UserId::new(1),
        username: "maria".to_owned(),
        name: "Maria".to_owned(),
        email: "maria@example.com".to_owned(),
        role,
    }
}

pub async fn setup_view_harness(view: ViewKind, role: Role) -> ViewHarness {
    let api = Arc::new(InMemoryApi::new(Clock::fixed(fixed_now())));
    let user = test_user(role);
    let user_id = user.id;
    api.seed_user(user, "secret");

    let auth = Arc::new(AuthService::new(api.clone()));
    let toasts = ToastService::new();
    let confirms = Arc::new(ConfirmService::new());
    let progress = Arc::new(ProgressService::new(api.clone()));
    let catalog = Arc::new(CatalogService::new(api.clone(), api.clone()));
    let badges = Arc::new(BadgeService::new(api.clone()));

    if view != ViewKind::Login {
        auth.login("maria", "secret").await.expect("login");
    }

    let app = Arc::new(TestApp {
        auth,
        toasts: Arc::clone(&toasts),
        confirms: Arc::clone(&confirms),
        progress,
        catalog,
        badges,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        api,
        user_id,
        toasts,
        confirms,
    }
}
