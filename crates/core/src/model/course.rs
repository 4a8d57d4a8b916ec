use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::{CourseId, ModuleId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseDraftError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course description cannot be empty")]
    EmptyDescription,

    #[error("a module must be selected")]
    MissingModule,

    #[error("content URL is not a valid URL")]
    InvalidContentUrl,
}

/// A named grouping of courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    pub description: String,
}

/// A course as listed by the backend, including its module denormalized in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub content_url: Option<Url>,
    pub active: bool,
    pub module_id: ModuleId,
    pub module_name: String,
}

/// Form input for creating or updating a course, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub content_url: String,
    pub module_id: Option<ModuleId>,
    pub active: bool,
}

/// A validated course payload, ready to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub content_url: Option<Url>,
    pub module_id: ModuleId,
    pub active: bool,
}

impl CourseDraft {
    /// Validate the draft into a backend-ready payload.
    ///
    /// Validation happens before any network call: empty required fields and
    /// malformed content URLs never reach the backend.
    ///
    /// # Errors
    ///
    /// Returns the first `CourseDraftError` encountered, checking title, then
    /// description, then module, then content URL.
    pub fn validate(&self) -> Result<NewCourse, CourseDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CourseDraftError::EmptyTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(CourseDraftError::EmptyDescription);
        }
        let module_id = self.module_id.ok_or(CourseDraftError::MissingModule)?;

        let content_url = match self.content_url.trim() {
            "" => None,
            raw => Some(Url::parse(raw).map_err(|_| CourseDraftError::InvalidContentUrl)?),
        };

        Ok(NewCourse {
            title: title.to_owned(),
            description: description.to_owned(),
            content_url,
            module_id,
            active: self.active,
        })
    }
}
