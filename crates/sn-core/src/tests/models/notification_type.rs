use crate::{Notification, NotificationType};

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_notification_type_as_str() {
    assert_eq!(NotificationType::FriendRequest.as_str(), "friend_request");
    assert_eq!(NotificationType::Message.as_str(), "message");
    assert_eq!(NotificationType::GroupInvite.as_str(), "group_invite");
}

#[test]
fn test_notification_type_from_str() {
    assert_eq!(
        NotificationType::from_str("group_invite").unwrap(),
        NotificationType::GroupInvite
    );
    assert!(NotificationType::from_str("poke").is_err());
}

#[test]
fn test_notification_reads_type_field() {
    let notification: Notification = serde_json::from_value(json!({
        "id": 3,
        "type": "friend_request",
        "fromUserId": 4,
        "fromUserName": "Linus",
        "content": "wants to be friends",
        "timestamp": "2024-03-01T08:00:00Z",
        "isRead": false
    }))
    .unwrap();

    assert_eq!(notification.kind, NotificationType::FriendRequest);
    assert!(!notification.is_read);
}
