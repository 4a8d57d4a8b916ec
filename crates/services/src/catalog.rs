//! Module/course listing and admin course management.

use std::sync::Arc;

use api::{CourseApi, ModuleApi};
use aula_core::model::{Course, CourseDraft, CourseId, Module, ModuleId};

use crate::error::CatalogServiceError;

/// Read access to the catalog plus the admin CRUD surface.
///
/// Form validation happens here, before any network call: drafts that fail
/// validation are rejected client-side and never sent to the backend.
#[derive(Clone)]
pub struct CatalogService {
    modules: Arc<dyn ModuleApi>,
    courses: Arc<dyn CourseApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(modules: Arc<dyn ModuleApi>, courses: Arc<dyn CourseApi>) -> Self {
        Self { modules, courses }
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the fetch fails.
    pub async fn list_modules(&self) -> Result<Vec<Module>, CatalogServiceError> {
        let modules = self.modules.list_modules().await?;
        Ok(modules)
    }

    /// Every course, for the admin view.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the fetch fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CatalogServiceError> {
        let courses = self.courses.list_courses().await?;
        Ok(courses)
    }

    /// Courses belonging to one module.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the fetch fails.
    pub async fn list_courses_by_module(
        &self,
        module_id: ModuleId,
    ) -> Result<Vec<Course>, CatalogServiceError> {
        let courses = self.courses.list_by_module(module_id).await?;
        Ok(courses)
    }

    /// Validate and create a course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Validation` for a bad draft (nothing is
    /// sent), or `Api` if the backend call fails.
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<Course, CatalogServiceError> {
        let payload = draft.validate()?;
        let course = self.courses.create_course(&payload).await?;
        Ok(course)
    }

    /// Validate and update an existing course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Validation` for a bad draft (nothing is
    /// sent), or `Api` if the backend call fails.
    pub async fn update_course(
        &self,
        id: CourseId,
        draft: &CourseDraft,
    ) -> Result<Course, CatalogServiceError> {
        let payload = draft.validate()?;
        let course = self.courses.update_course(id, &payload).await?;
        Ok(course)
    }

    /// Delete a course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the backend call fails.
    pub async fn delete_course(&self, id: CourseId) -> Result<(), CatalogServiceError> {
        self.courses.delete_course(id).await?;
        Ok(())
    }
}
