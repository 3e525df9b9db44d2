use crate::{Message, User};

fn sender() -> User {
    User::new(1, "+1".to_string(), "Sender".to_string(), "Mentor".to_string())
}

#[test]
fn test_public_message_visible_to_everyone() {
    let message = Message::new(10, &sender(), "hello".to_string(), None);

    assert!(message.is_public());
    assert!(message.is_visible_to(99));
}

#[test]
fn test_direct_message_visible_to_parties_only() {
    let message = Message::new(10, &sender(), "psst".to_string(), Some(2));

    assert!(message.is_visible_to(1));
    assert!(message.is_visible_to(2));
    assert!(!message.is_visible_to(3));
}

#[test]
fn test_public_message_omits_recipient_field() {
    let message = Message::new(10, &sender(), "hello".to_string(), None);
    let value = serde_json::to_value(&message).unwrap();

    assert!(value.get("toUserId").is_none());
    assert_eq!(value["fromUserName"], "Sender");
}
