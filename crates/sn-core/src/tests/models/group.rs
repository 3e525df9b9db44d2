use crate::Group;

use serde_json::json;

#[test]
fn test_group_new_has_creator_as_only_member() {
    let group = Group::new(1, "Readers".to_string(), String::new(), 42);

    assert!(group.is_member(42));
    assert!(!group.is_member(43));
    assert_eq!(group.size(), 1);
}

#[test]
fn test_group_from_count_only_body() {
    let group: Group = serde_json::from_value(json!({
        "id": 5,
        "name": "Chess",
        "description": "",
        "createdBy": 9,
        "memberCount": 14
    }))
    .unwrap();

    assert!(group.members.is_empty());
    assert_eq!(group.size(), 14);
    assert!(group.is_member(9));
}

#[test]
fn test_group_from_member_list_body() {
    let group: Group = serde_json::from_value(json!({
        "id": 5,
        "name": "Chess",
        "createdBy": 9,
        "members": [9, 10, 11]
    }))
    .unwrap();

    assert_eq!(group.size(), 3);
    assert!(group.is_member(10));
    assert_eq!(group.description, "");
}
