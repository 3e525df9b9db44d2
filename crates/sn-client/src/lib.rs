//! sn-client library
//!
//! View controllers for the login, registration and dashboard views, the
//! context object they share, and the text rendering used by the `sn` binary.

pub mod action;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod logger;
pub mod login;
pub mod notice;
pub mod register;
pub mod render;
pub mod route;
pub mod transition;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use context::ClientContext;
pub use dashboard::{
    dashboard_controller::DashboardController, drafts::Drafts, mount::Mount, panel::Panel,
    profile_form::ProfileForm,
};
pub use error::{ClientError, ErrorCategory, Result as ClientResult};
pub use login::{LoginController, LoginForm};
pub use notice::Notice;
pub use register::{RegisterController, RegisterForm};
pub use route::Route;
pub use transition::Transition;
