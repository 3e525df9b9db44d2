mod group;
mod message;
mod notification_type;
mod user;
