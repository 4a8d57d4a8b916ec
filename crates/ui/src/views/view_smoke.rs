use chrono::Duration;

use aula_core::model::{
    Badge, BadgeAward, BadgeId, Course, CourseId, Module, ModuleId, ProgressId, ProgressRecord,
    ProgressStatus, Role, UserId,
};
use aula_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness};

fn record(
    id: u64,
    user_id: UserId,
    title: &str,
    module: Option<&str>,
    status: ProgressStatus,
) -> ProgressRecord {
    let now = fixed_now();
    let started_at = match status {
        ProgressStatus::NotStarted => None,
        _ => Some(now - Duration::days(2)),
    };
    let completed_at = match status {
        ProgressStatus::Completed => Some(now - Duration::days(1)),
        _ => None,
    };
    ProgressRecord {
        id: ProgressId::new(id),
        user_id,
        course_id: CourseId::new(id),
        course_title: title.to_owned(),
        module_id: None,
        module_name: module.map(str::to_owned),
        started_at,
        completed_at,
        status,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, Role::User).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Log in"), "missing submit in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("Password"), "missing password field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_stats() {
    let mut harness = setup_view_harness(ViewKind::Home, Role::User).await;
    let user_id = harness.user_id;
    harness
        .api
        .seed_progress(record(1, user_id, "Rust Basics", Some("Rust"), ProgressStatus::Completed));
    harness
        .api
        .seed_progress(record(2, user_id, "Async Rust", Some("Rust"), ProgressStatus::InProgress));

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Welcome, Maria"), "missing greeting in {html}");
    assert!(html.contains("50%"), "missing completion percent in {html}");
    assert!(html.contains("Async Rust"), "missing in-progress course in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modules_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::Modules, Role::User).await;
    harness.api.seed_module(Module {
        id: ModuleId::new(1),
        name: "Rust".to_owned(),
        description: "Systems programming".to_owned(),
    });

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Rust"), "missing module card in {html}");
    assert!(html.contains("Systems programming"), "missing description in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_status_actions() {
    let mut harness = setup_view_harness(ViewKind::Courses(1), Role::User).await;
    let user_id = harness.user_id;
    let module_id = ModuleId::new(1);
    harness.api.seed_course(Course {
        id: CourseId::new(1),
        title: "Rust Basics".to_owned(),
        description: "Start here".to_owned(),
        content_url: None,
        active: true,
        module_id,
        module_name: "Rust".to_owned(),
    });
    harness.api.seed_course(Course {
        id: CourseId::new(2),
        title: "Async Rust".to_owned(),
        description: "Futures and executors".to_owned(),
        content_url: None,
        active: true,
        module_id,
        module_name: "Rust".to_owned(),
    });
    harness
        .api
        .seed_progress(record(2, user_id, "Async Rust", Some("Rust"), ProgressStatus::InProgress));

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start course"), "missing start action in {html}");
    assert!(html.contains("Mark completed"), "missing complete action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_smoke_renders_rollup_and_feed() {
    let mut harness = setup_view_harness(ViewKind::Profile, Role::User).await;
    let user_id = harness.user_id;
    harness
        .api
        .seed_progress(record(1, user_id, "Rust Basics", Some("Rust"), ProgressStatus::Completed));
    harness
        .api
        .seed_progress(record(2, user_id, "Async Rust", Some("Rust"), ProgressStatus::InProgress));
    harness.api.seed_award(
        user_id,
        BadgeAward {
            badge: Badge {
                id: BadgeId::new(1),
                name: "First Steps".to_owned(),
                description: "Completed a first course".to_owned(),
                image_url: String::new(),
            },
            awarded_at: fixed_now(),
        },
    );

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Progress by module"), "missing rollup in {html}");
    assert!(html.contains("1/2 (50%)"), "missing module counts in {html}");
    assert!(
        html.contains("Course completed: Rust Basics"),
        "missing completion entry in {html}"
    );
    assert!(
        html.contains("Badge earned: First Steps"),
        "missing badge entry in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_renders_form_for_admins() {
    let mut harness = setup_view_harness(ViewKind::AdminCourses, Role::Admin).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("New course"), "missing course form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_hides_form_from_regular_users() {
    let mut harness = setup_view_harness(ViewKind::AdminCourses, Role::User).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("New course"), "form leaked to non-admin in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(ViewKind::Home, Role::User).await;
    harness
        .api
        .inject_failure(api::Failpoint::Progress, Some("progress backend down".to_owned()));

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    // The backend's own message is shown, not the generic fallback.
    assert!(html.contains("progress backend down"), "missing error copy in {html}");
    assert!(!html.contains("Something went wrong"), "generic copy leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn toast_overlay_smoke_renders_published_toast() {
    let mut harness = setup_view_harness(ViewKind::Login, Role::User).await;
    harness.toasts.success("Saved.");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Saved."), "missing toast in {html}");
    assert!(html.contains("toast-success"), "missing toast class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn confirm_overlay_smoke_renders_and_resolves() {
    let mut harness = setup_view_harness(ViewKind::Home, Role::User).await;
    harness.rebuild();

    let confirms = harness.confirms.clone();
    let decision = tokio::spawn(async move {
        confirms.danger("Delete \"Rust Basics\"?", "Delete course").await
    });

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Delete course"), "missing dialog title in {html}");

    harness.confirms.resolve(true);
    assert!(decision.await.expect("confirm task"), "expected confirmed decision");

    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Delete course"), "dialog still visible in {html}");
}
