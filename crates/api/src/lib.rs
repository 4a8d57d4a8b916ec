#![forbid(unsafe_code)]

pub mod contract;
pub mod http;

pub use contract::{
    ApiError, AuthApi, BadgeApi, CourseApi, Failpoint, InMemoryApi, ModuleApi, NewProgress,
    ProgressApi, GENERIC_FAILURE_MESSAGE,
};
pub use http::{ApiConfig, HttpApi};
