//! `reqwest` adapter for the backend REST API.
//!
//! Wire DTOs live here so backend field naming (camelCase JSON) stays out of
//! the domain model.

use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use aula_core::model::{
    Badge, BadgeAward, BadgeId, Course, CourseId, Module, ModuleId, NewCourse, ProgressId,
    ProgressRecord, ProgressStatus, Role, SessionUser, UserId,
};

use crate::contract::{
    ApiError, AuthApi, BadgeApi, CourseApi, ModuleApi, NewProgress, ProgressApi,
};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `AULA_API_URL`, defaulting to the local dev backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("AULA_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".into());
        Self { base_url }
    }
}

/// HTTP implementation of every data-access trait.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn checked(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.or(body.message))
            .filter(|m| !m.trim().is_empty());
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

//
// ─── WIRE DTOS ─────────────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: u64,
    username: String,
    name: String,
    email: String,
    role: Role,
}

impl From<UserDto> for SessionUser {
    fn from(dto: UserDto) -> Self {
        Self {
            id: UserId::new(dto.id),
            username: dto.username,
            name: dto.name,
            email: dto.email,
            role: dto.role,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModuleDto {
    id: u64,
    name: String,
    description: String,
}

impl From<ModuleDto> for Module {
    fn from(dto: ModuleDto) -> Self {
        Self {
            id: ModuleId::new(dto.id),
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseDto {
    id: u64,
    title: String,
    description: String,
    content_url: Option<String>,
    #[serde(default = "default_active")]
    active: bool,
    module_id: u64,
    module_name: Option<String>,
}

fn default_active() -> bool {
    true
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Self {
            id: CourseId::new(dto.id),
            title: dto.title,
            description: dto.description,
            // Backend data can carry placeholder junk here; an unparseable
            // URL renders as "no content link" rather than failing the list.
            content_url: dto.content_url.and_then(|raw| Url::parse(&raw).ok()),
            active: dto.active,
            module_id: ModuleId::new(dto.module_id),
            module_name: dto.module_name.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CoursePayload<'a> {
    title: &'a str,
    description: &'a str,
    content_url: Option<&'a str>,
    active: bool,
    module_id: u64,
}

impl<'a> From<&'a NewCourse> for CoursePayload<'a> {
    fn from(course: &'a NewCourse) -> Self {
        Self {
            title: &course.title,
            description: &course.description,
            content_url: course.content_url.as_ref().map(Url::as_str),
            active: course.active,
            module_id: course.module_id.value(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressDto {
    id: u64,
    user_id: u64,
    course_id: u64,
    course_title: Option<String>,
    module_id: Option<u64>,
    module_name: Option<String>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    status: Option<ProgressStatus>,
}

impl From<ProgressDto> for ProgressRecord {
    fn from(dto: ProgressDto) -> Self {
        Self {
            id: ProgressId::new(dto.id),
            user_id: UserId::new(dto.user_id),
            course_id: CourseId::new(dto.course_id),
            course_title: dto.course_title.unwrap_or_default(),
            module_id: dto.module_id.map(ModuleId::new),
            module_name: dto.module_name,
            started_at: dto.started_at,
            completed_at: dto.completed_at,
            status: dto.status.unwrap_or(ProgressStatus::NotStarted),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressPayload {
    user_id: u64,
    course_id: u64,
    status: ProgressStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BadgeDto {
    id: u64,
    name: String,
    description: String,
    image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwardDto {
    badge: BadgeDto,
    awarded_at: DateTime<Utc>,
}

impl From<AwardDto> for BadgeAward {
    fn from(dto: AwardDto) -> Self {
        Self {
            badge: Badge {
                id: BadgeId::new(dto.badge.id),
                name: dto.badge.name,
                description: dto.badge.description,
                image_url: dto.badge.image_url.unwrap_or_default(),
            },
            awarded_at: dto.awarded_at,
        }
    }
}

//
// ─── TRAIT IMPLEMENTATIONS ─────────────────────────────────────────────────────
//

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ApiError> {
        let response = self
            .client
            .post(self.url("/users/login"))
            .json(&LoginPayload { username, password })
            .send()
            .await?;
        let dto: UserDto = Self::checked(response).await?.json().await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl ModuleApi for HttpApi {
    async fn list_modules(&self) -> Result<Vec<Module>, ApiError> {
        let response = self.client.get(self.url("/modules")).send().await?;
        let dtos: Vec<ModuleDto> = Self::checked(response).await?.json().await?;
        Ok(dtos.into_iter().map(Module::from).collect())
    }
}

#[async_trait]
impl CourseApi for HttpApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let response = self.client.get(self.url("/courses")).send().await?;
        let dtos: Vec<CourseDto> = Self::checked(response).await?.json().await?;
        Ok(dtos.into_iter().map(Course::from).collect())
    }

    async fn list_by_module(&self, module_id: ModuleId) -> Result<Vec<Course>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/courses/module/{module_id}")))
            .send()
            .await?;
        let dtos: Vec<CourseDto> = Self::checked(response).await?.json().await?;
        Ok(dtos.into_iter().map(Course::from).collect())
    }

    async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        let response = self
            .client
            .post(self.url("/courses"))
            .json(&CoursePayload::from(course))
            .send()
            .await?;
        let dto: CourseDto = Self::checked(response).await?.json().await?;
        Ok(dto.into())
    }

    async fn update_course(&self, id: CourseId, course: &NewCourse) -> Result<Course, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/courses/{id}")))
            .json(&CoursePayload::from(course))
            .send()
            .await?;
        let dto: CourseDto = Self::checked(response).await?.json().await?;
        Ok(dto.into())
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/courses/{id}")))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ProgressApi for HttpApi {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/progress/user/{user_id}")))
            .send()
            .await?;
        let dtos: Vec<ProgressDto> = Self::checked(response).await?.json().await?;
        Ok(dtos.into_iter().map(ProgressRecord::from).collect())
    }

    async fn create(&self, new: &NewProgress) -> Result<ProgressRecord, ApiError> {
        let response = self
            .client
            .post(self.url("/progress"))
            .json(&ProgressPayload {
                user_id: new.user_id.value(),
                course_id: new.course_id.value(),
                status: new.status,
            })
            .send()
            .await?;
        let dto: ProgressDto = Self::checked(response).await?.json().await?;
        Ok(dto.into())
    }

    async fn complete(&self, id: ProgressId) -> Result<ProgressRecord, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/progress/{id}/complete")))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let dto: ProgressDto = Self::checked(response).await?.json().await?;
        Ok(dto.into())
    }

    async fn delete(&self, id: ProgressId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/progress/{id}")))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }
}

#[async_trait]
impl BadgeApi for HttpApi {
    async fn list_awards_for_user(&self, user_id: UserId) -> Result<Vec<BadgeAward>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/badges/user/{user_id}")))
            .send()
            .await?;
        let dtos: Vec<AwardDto> = Self::checked(response).await?.json().await?;
        Ok(dtos.into_iter().map(BadgeAward::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpApi::new(&ApiConfig::new("http://localhost:8080/api/"));
        assert_eq!(api.url("/modules"), "http://localhost:8080/api/modules");
    }

    #[test]
    fn course_dto_tolerates_bad_content_url() {
        let dto: CourseDto = serde_json::from_str(
            r#"{"id":1,"title":"T","description":"D","contentUrl":"not a url","moduleId":2,"moduleName":"M"}"#,
        )
        .unwrap();
        let course = Course::from(dto);
        assert!(course.content_url.is_none());
        assert!(course.active);
        assert_eq!(course.module_name, "M");
    }

    #[test]
    fn progress_dto_defaults_missing_status() {
        let dto: ProgressDto =
            serde_json::from_str(r#"{"id":1,"userId":2,"courseId":3}"#).unwrap();
        let record = ProgressRecord::from(dto);
        assert_eq!(record.status, ProgressStatus::NotStarted);
        assert!(record.started_at.is_none());
    }
}
