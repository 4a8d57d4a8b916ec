//! Badge-award queries.

use std::sync::Arc;

use api::{ApiError, BadgeApi};
use aula_core::model::{BadgeAward, UserId};

/// Read access to a user's badge awards.
///
/// Badges refresh independently of progress: the profile page issues both
/// fetches concurrently and renders whichever succeeds.
#[derive(Clone)]
pub struct BadgeService {
    api: Arc<dyn BadgeApi>,
}

impl BadgeService {
    #[must_use]
    pub fn new(api: Arc<dyn BadgeApi>) -> Self {
        Self { api }
    }

    /// The user's awards, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the fetch fails.
    pub async fn list_awards_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeAward>, ApiError> {
        let mut awards = self.api.list_awards_for_user(user_id).await?;
        awards.sort_by(|a, b| b.awarded_at.cmp(&a.awarded_at));
        Ok(awards)
    }
}
