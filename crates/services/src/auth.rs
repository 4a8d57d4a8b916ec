//! Authenticated-session provider.

use std::sync::Arc;

use tokio::sync::watch;

use api::{ApiError, AuthApi};
use aula_core::model::SessionUser;

use crate::error::AuthServiceError;

/// Holds "current user or none" for the whole client and exposes it as an
/// observable slot. The session lives in memory only; the backend stays
/// authoritative for everything else.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    current: watch::Sender<Option<SessionUser>>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        let (current, _) = watch::channel(None);
        Self { api, current }
    }

    /// Exchange credentials for a session and publish it.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::InvalidCredentials` when the backend
    /// rejects the credentials, or `AuthServiceError::Api` for transport
    /// failures.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionUser, AuthServiceError> {
        let user = self
            .api
            .login(username, password)
            .await
            .map_err(|err| match err {
                ApiError::Unauthorized => AuthServiceError::InvalidCredentials,
                other => AuthServiceError::Api(other),
            })?;
        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Drop the session.
    pub fn logout(&self) {
        self.current.send_replace(None);
    }

    /// Observe the session slot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.current.subscribe()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.current.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|user| user.role.is_admin())
    }
}
