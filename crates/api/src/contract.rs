//! Data-access contracts for the backend REST API, plus an in-memory fake.
//!
//! The client treats the backend as authoritative: these traits hand back
//! read-only snapshots and the mutating calls return the refreshed record.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use aula_core::Clock;
use aula_core::model::{
    BadgeAward, Course, CourseId, Module, ModuleId, NewCourse, ProgressId, ProgressRecord,
    ProgressStatus, SessionUser, UserId,
};

/// Shown when the backend fails without a usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors surfaced by data-access adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid credentials")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("response decoding failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message for a toast: the backend's own message when it
    /// sent one, otherwise a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Invalid username or password.".to_owned(),
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Payload for enrolling a user in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProgress {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub status: ProgressStatus,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials, or transport
    /// errors.
    async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ApiError>;
}

#[async_trait]
pub trait ModuleApi: Send + Sync {
    /// List all modules.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn list_modules(&self) -> Result<Vec<Module>, ApiError>;
}

#[async_trait]
pub trait CourseApi: Send + Sync {
    /// List every course, active or not (admin view).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    /// List the courses belonging to one module.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn list_by_module(&self, module_id: ModuleId) -> Result<Vec<Course>, ApiError>;

    /// Create a course from a validated payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError>;

    /// Replace an existing course.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other failures.
    async fn update_course(&self, id: CourseId, course: &NewCourse) -> Result<Course, ApiError>;

    /// Delete a course.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other failures.
    async fn delete_course(&self, id: CourseId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// All progress records for one user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, ApiError>;

    /// Enroll: create a progress record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn create(&self, new: &NewProgress) -> Result<ProgressRecord, ApiError>;

    /// Mark a record completed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other failures.
    async fn complete(&self, id: ProgressId) -> Result<ProgressRecord, ApiError>;

    /// Remove a progress record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other failures.
    async fn delete(&self, id: ProgressId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait BadgeApi: Send + Sync {
    /// All badge awards for one user. Independent of the progress snapshot;
    /// one failing does not block the other.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn list_awards_for_user(&self, user_id: UserId) -> Result<Vec<BadgeAward>, ApiError>;
}

//
// ─── IN-MEMORY FAKE ────────────────────────────────────────────────────────────
//

/// Endpoint families that can be told to fail, for tests exercising the
/// error-toast and graceful-degradation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failpoint {
    Auth,
    Modules,
    Courses,
    Progress,
    Badges,
}

#[derive(Default)]
struct InMemoryState {
    users: Vec<(SessionUser, String)>,
    modules: Vec<Module>,
    courses: Vec<Course>,
    progress: Vec<ProgressRecord>,
    awards: HashMap<UserId, Vec<BadgeAward>>,
    next_course_id: u64,
    next_progress_id: u64,
    failures: HashMap<Failpoint, Option<String>>,
}

/// In-memory `*Api` implementation for unit and view tests.
pub struct InMemoryApi {
    clock: Clock,
    state: Mutex<InMemoryState>,
}

impl InMemoryApi {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: Mutex::new(InMemoryState {
                next_course_id: 1,
                next_progress_id: 1,
                ..InMemoryState::default()
            }),
        }
    }

    /// Arm a one-shot failure for the given endpoint family. The next call
    /// hitting it fails with a 500 carrying `message`, then the fault clears.
    pub fn inject_failure(&self, target: Failpoint, message: Option<String>) {
        self.lock().failures.insert(target, message);
    }

    pub fn seed_user(&self, user: SessionUser, password: &str) {
        self.lock().users.push((user, password.to_owned()));
    }

    pub fn seed_module(&self, module: Module) {
        self.lock().modules.push(module);
    }

    pub fn seed_course(&self, course: Course) {
        let mut state = self.lock();
        state.next_course_id = state.next_course_id.max(course.id.value() + 1);
        state.courses.push(course);
    }

    pub fn seed_progress(&self, record: ProgressRecord) {
        let mut state = self.lock();
        state.next_progress_id = state.next_progress_id.max(record.id.value() + 1);
        state.progress.push(record);
    }

    pub fn seed_award(&self, user_id: UserId, award: BadgeAward) {
        self.lock().awards.entry(user_id).or_default().push(award);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryState> {
        self.state.lock().expect("in-memory api lock poisoned")
    }

    fn take_failure(&self, target: Failpoint) -> Result<(), ApiError> {
        let mut state = self.lock();
        match state.failures.remove(&target) {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthApi for InMemoryApi {
    async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ApiError> {
        self.take_failure(Failpoint::Auth)?;
        let state = self.lock();
        state
            .users
            .iter()
            .find(|(user, stored)| user.username == username && stored == password)
            .map(|(user, _)| user.clone())
            .ok_or(ApiError::Unauthorized)
    }
}

#[async_trait]
impl ModuleApi for InMemoryApi {
    async fn list_modules(&self) -> Result<Vec<Module>, ApiError> {
        self.take_failure(Failpoint::Modules)?;
        Ok(self.lock().modules.clone())
    }
}

#[async_trait]
impl CourseApi for InMemoryApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.take_failure(Failpoint::Courses)?;
        Ok(self.lock().courses.clone())
    }

    async fn list_by_module(&self, module_id: ModuleId) -> Result<Vec<Course>, ApiError> {
        self.take_failure(Failpoint::Courses)?;
        Ok(self
            .lock()
            .courses
            .iter()
            .filter(|c| c.module_id == module_id)
            .cloned()
            .collect())
    }

    async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        self.take_failure(Failpoint::Courses)?;
        let mut state = self.lock();
        let module_name = state
            .modules
            .iter()
            .find(|m| m.id == course.module_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        let id = CourseId::new(state.next_course_id);
        state.next_course_id += 1;
        let created = Course {
            id,
            title: course.title.clone(),
            description: course.description.clone(),
            content_url: course.content_url.clone(),
            active: course.active,
            module_id: course.module_id,
            module_name,
        };
        state.courses.push(created.clone());
        Ok(created)
    }

    async fn update_course(&self, id: CourseId, course: &NewCourse) -> Result<Course, ApiError> {
        self.take_failure(Failpoint::Courses)?;
        let mut state = self.lock();
        let module_name = state
            .modules
            .iter()
            .find(|m| m.id == course.module_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        let existing = state
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::NotFound)?;
        existing.title = course.title.clone();
        existing.description = course.description.clone();
        existing.content_url = course.content_url.clone();
        existing.active = course.active;
        existing.module_id = course.module_id;
        existing.module_name = module_name;
        Ok(existing.clone())
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), ApiError> {
        self.take_failure(Failpoint::Courses)?;
        let mut state = self.lock();
        let before = state.courses.len();
        state.courses.retain(|c| c.id != id);
        if state.courses.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressApi for InMemoryApi {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, ApiError> {
        self.take_failure(Failpoint::Progress)?;
        Ok(self
            .lock()
            .progress
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new: &NewProgress) -> Result<ProgressRecord, ApiError> {
        self.take_failure(Failpoint::Progress)?;
        let now = self.clock.now();
        let mut state = self.lock();
        let course = state.courses.iter().find(|c| c.id == new.course_id);
        let course_title = course.map(|c| c.title.clone()).unwrap_or_default();
        let module_id = course.map(|c| c.module_id);
        let module_name = course.map(|c| c.module_name.clone());
        let id = ProgressId::new(state.next_progress_id);
        state.next_progress_id += 1;
        let record = ProgressRecord {
            id,
            user_id: new.user_id,
            course_id: new.course_id,
            course_title,
            module_id,
            module_name,
            started_at: Some(now),
            completed_at: None,
            status: new.status,
        };
        state.progress.push(record.clone());
        Ok(record)
    }

    async fn complete(&self, id: ProgressId) -> Result<ProgressRecord, ApiError> {
        self.take_failure(Failpoint::Progress)?;
        let now = self.clock.now();
        let mut state = self.lock();
        let record = state
            .progress
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;
        record.status = ProgressStatus::Completed;
        record.completed_at = Some(now);
        Ok(record.clone())
    }

    async fn delete(&self, id: ProgressId) -> Result<(), ApiError> {
        self.take_failure(Failpoint::Progress)?;
        let mut state = self.lock();
        let before = state.progress.len();
        state.progress.retain(|p| p.id != id);
        if state.progress.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BadgeApi for InMemoryApi {
    async fn list_awards_for_user(&self, user_id: UserId) -> Result<Vec<BadgeAward>, ApiError> {
        self.take_failure(Failpoint::Badges)?;
        Ok(self
            .lock()
            .awards
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
