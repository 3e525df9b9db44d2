pub mod error;
pub mod models;
pub mod timestamp;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::group::Group;
pub use models::message::Message;
pub use models::notification::Notification;
pub use models::notification_type::NotificationType;
pub use models::post::Post;
pub use models::profile_update::ProfileUpdate;
pub use models::user::User;

/// Identifier type shared by every entity.
pub type EntityId = i64;

/// Position assigned when registration leaves it blank.
pub const DEFAULT_POSITION: &str = "Mentor";
pub const MIN_PASSWORD_LENGTH: usize = 6;
