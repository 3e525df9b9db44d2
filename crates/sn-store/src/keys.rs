//! Names under which state is persisted.

use sn_core::EntityId;

pub const CURRENT_USER: &str = "currentUser";
pub const USERS: &str = "users";
pub const POSTS: &str = "posts";
pub const MESSAGES: &str = "messages";
pub const GROUPS: &str = "groups";
pub const NOTIFICATIONS: &str = "notifications";

/// Friend id list of one user.
pub fn friends(user_id: EntityId) -> String {
    format!("friends_{user_id}")
}

/// Keys are plain identifiers so they map one-to-one onto file names.
pub fn is_valid(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
