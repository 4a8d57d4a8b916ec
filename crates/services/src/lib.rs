#![forbid(unsafe_code)]

pub mod auth;
pub mod badges;
pub mod catalog;
pub mod confirm;
pub mod error;
pub mod progress;
pub mod toast;

pub use aula_core::Clock;

pub use auth::AuthService;
pub use badges::BadgeService;
pub use catalog::CatalogService;
pub use confirm::{ConfirmOptions, ConfirmRequest, ConfirmService, ConfirmSeverity};
pub use error::{AuthServiceError, CatalogServiceError, ProgressServiceError};
pub use progress::ProgressService;
pub use toast::{DEFAULT_TOAST_DURATION, Toast, ToastId, ToastKind, ToastService};
