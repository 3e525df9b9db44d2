//! Plain-text views for the terminal.

use crate::{Notice, format};

use std::fmt::Write;

use chrono::{DateTime, Utc};
use sn_core::{EntityId, Group, Message, Notification, Post, User};

pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::Success(message) => format!("✓ {message}"),
        Notice::Error(message) => format!("✗ {message}"),
    }
}

pub fn profile(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", format::initials(&user.full_name), user.full_name);
    let _ = writeln!(out, "  id:       {}", user.id);
    let _ = writeln!(out, "  phone:    {}", user.phone);
    let _ = writeln!(out, "  position: {}", user.position);
    if let Some(ref email) = user.email {
        let _ = writeln!(out, "  email:    {email}");
    }
    if let Some(birth_date) = user.birth_date {
        let _ = writeln!(out, "  born:     {birth_date}");
    }
    if let Some(ref bio) = user.bio {
        let _ = writeln!(out, "  bio:      {bio}");
    }
    if let Some(registered_at) = user.registered_at {
        let _ = writeln!(out, "  joined:   {}", registered_at.format("%Y-%m-%d"));
    }
    out
}

pub fn feed(posts: &[Post], now: DateTime<Utc>) -> String {
    if posts.is_empty() {
        return "No posts yet.\n".to_string();
    }

    let mut out = String::new();
    for post in posts {
        let _ = writeln!(
            out,
            "#{} [{}] {} ({}) · {}",
            post.id,
            format::initials(&post.user_name),
            post.user_name,
            post.user_position,
            format::relative_time(post.timestamp, now)
        );
        let _ = writeln!(out, "    {}", post.content);
    }
    out
}

/// Messages sent by `user_id` are marked with `>`.
pub fn chat(messages: &[Message], user_id: EntityId, now: DateTime<Utc>) -> String {
    if messages.is_empty() {
        return "No messages yet.\n".to_string();
    }

    let mut out = String::new();
    for message in messages {
        let marker = if message.from_user_id == user_id { '>' } else { ' ' };
        let recipient = match message.to_user_id {
            Some(to) => format!(" → {to}"),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "{marker} {}{recipient} ({}): {}",
            message.from_user_name,
            format::relative_time(message.timestamp, now),
            message.content
        );
    }
    out
}

pub fn groups(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups yet.\n".to_string();
    }

    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "#{} {} ({} members)", group.id, group.name, group.size());
        if !group.description.is_empty() {
            let _ = writeln!(out, "    {}", group.description);
        }
    }
    out
}

pub fn notifications(notifications: &[Notification], now: DateTime<Utc>) -> String {
    if notifications.is_empty() {
        return "No notifications.\n".to_string();
    }

    let mut out = String::new();
    for notification in notifications {
        let unread = if notification.is_read { ' ' } else { '*' };
        let _ = writeln!(
            out,
            "{unread} [{}] {}: {} ({})",
            notification.kind.as_str(),
            notification.from_user_name,
            notification.content,
            format::relative_time(notification.timestamp, now)
        );
    }
    out
}

pub fn friends(friends: &[EntityId]) -> String {
    if friends.is_empty() {
        return "No friends yet.\n".to_string();
    }

    let mut out = String::new();
    for id in friends {
        let _ = writeln!(out, "user #{id}");
    }
    out
}
