//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;
use aula_core::model::CourseDraftError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ProgressService`.
///
/// The conflict variants are logical state conflicts, not failures: the UI
/// surfaces them as informational toasts (the user already holds the course).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("course is already in progress")]
    AlreadyInProgress,
    #[error("course is already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ProgressServiceError {
    /// True for the conflict variants that should render as info, not error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ProgressServiceError::AlreadyInProgress | ProgressServiceError::AlreadyCompleted
        )
    }
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Validation(#[from] CourseDraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
