use dioxus::prelude::*;

use services::{CatalogServiceError, ProgressServiceError};

/// What a view can tell the user when its resource fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The backend failed or rejected the call; carries its message.
    Backend(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Backend(message) => message,
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<ProgressServiceError> for ViewError {
    fn from(err: ProgressServiceError) -> Self {
        match err {
            ProgressServiceError::Api(api) => Self::Backend(api.user_message()),
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<CatalogServiceError> for ViewError {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::Api(api) => Self::Backend(api.user_message()),
            other => Self::Backend(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
