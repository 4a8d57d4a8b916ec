mod badge;
mod course;
mod ids;
mod progress;
mod user;

pub use badge::{Badge, BadgeAward};
pub use course::{Course, CourseDraft, CourseDraftError, Module, NewCourse};
pub use ids::{BadgeId, CourseId, ModuleId, ParseIdError, ProgressId, UserId};
pub use progress::{ProgressRecord, ProgressStatus};
pub use user::{Role, SessionUser};
