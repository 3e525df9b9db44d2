pub mod group;
pub mod message;
pub mod notification;
pub mod notification_type;
pub mod post;
pub mod profile_update;
pub mod user;
