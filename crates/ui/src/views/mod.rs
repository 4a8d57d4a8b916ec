mod admin_courses;
mod courses;
mod home;
mod login;
mod modules;
mod profile;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin_courses::AdminCoursesView;
pub use courses::CoursesView;
pub use home::HomeView;
pub use login::LoginView;
pub use modules::ModulesView;
pub use profile::ProfileView;
pub use state::{ViewError, ViewState, view_state_from_resource};
