//! Enrollment and completion workflow over the progress data-access seam.

use std::sync::Arc;

use api::{NewProgress, ProgressApi};
use aula_core::model::{CourseId, ProgressId, ProgressRecord, ProgressStatus, UserId};

use crate::error::ProgressServiceError;

/// Orchestrates progress reads and mutations.
///
/// The backend owns progress state; this service only adds the client-side
/// conflict checks so a re-enroll attempt never even reaches the network.
#[derive(Clone)]
pub struct ProgressService {
    api: Arc<dyn ProgressApi>,
}

impl ProgressService {
    #[must_use]
    pub fn new(api: Arc<dyn ProgressApi>) -> Self {
        Self { api }
    }

    /// Fetch the user's progress snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Api` if the fetch fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProgressRecord>, ProgressServiceError> {
        let records = self.api.list_for_user(user_id).await?;
        Ok(records)
    }

    /// Enroll the user in a course.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInProgress`/`AlreadyCompleted` when the user already
    /// holds the course (logical conflicts, surfaced as info toasts), or
    /// `Api` for transport failures.
    pub async fn start_course(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let existing = self.api.list_for_user(user_id).await?;
        if let Some(found) = existing.iter().find(|p| p.course_id == course_id) {
            match found.status {
                ProgressStatus::InProgress => {
                    return Err(ProgressServiceError::AlreadyInProgress);
                }
                ProgressStatus::Completed => {
                    return Err(ProgressServiceError::AlreadyCompleted);
                }
                // An enrolled-but-unstarted record is fine to (re)start.
                ProgressStatus::NotStarted => {}
            }
        }

        let record = self
            .api
            .create(&NewProgress {
                user_id,
                course_id,
                status: ProgressStatus::InProgress,
            })
            .await?;
        Ok(record)
    }

    /// Mark a progress record completed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Api` if the call fails.
    pub async fn complete_course(
        &self,
        progress_id: ProgressId,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let record = self.api.complete(progress_id).await?;
        Ok(record)
    }

    /// Remove a progress record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Api` if the call fails.
    pub async fn delete_progress(
        &self,
        progress_id: ProgressId,
    ) -> Result<(), ProgressServiceError> {
        self.api.delete(progress_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryApi;
    use aula_core::Clock;
    use aula_core::time::fixed_now;

    fn service() -> (Arc<InMemoryApi>, ProgressService) {
        let api = Arc::new(InMemoryApi::new(Clock::fixed(fixed_now())));
        (Arc::clone(&api), ProgressService::new(api))
    }

    #[tokio::test]
    async fn start_course_creates_an_in_progress_record() {
        let (_, progress) = service();
        let record = progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap();
        assert_eq!(record.status, ProgressStatus::InProgress);
        assert_eq!(record.started_at, Some(fixed_now()));
    }

    #[tokio::test]
    async fn starting_twice_is_a_conflict_not_an_error() {
        let (_, progress) = service();
        progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap();

        let err = progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressServiceError::AlreadyInProgress));
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn starting_a_completed_course_reports_completed() {
        let (_, progress) = service();
        let record = progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap();
        progress.complete_course(record.id).await.unwrap();

        let err = progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressServiceError::AlreadyCompleted));
    }

    #[tokio::test]
    async fn conflicts_are_scoped_per_course() {
        let (_, progress) = service();
        progress
            .start_course(UserId::new(1), CourseId::new(10))
            .await
            .unwrap();

        // A different course for the same user is not a conflict.
        assert!(
            progress
                .start_course(UserId::new(1), CourseId::new(11))
                .await
                .is_ok()
        );
        // Nor is the same course for a different user.
        assert!(
            progress
                .start_course(UserId::new(2), CourseId::new(10))
                .await
                .is_ok()
        );
    }
}
