use crate::{ProfileUpdate, User};

use chrono::NaiveDate;
use serde_json::json;

fn sample_user() -> User {
    User::new(
        7,
        "+15550001".to_string(),
        "Ada Lovelace".to_string(),
        "Mentor".to_string(),
    )
}

#[test]
fn test_user_new_sets_registration_time() {
    let user = sample_user();

    assert_eq!(user.id, 7);
    assert!(user.registered_at.is_some());
    assert!(user.email.is_none());
}

#[test]
fn test_user_deserializes_remote_login_body() {
    let user: User = serde_json::from_value(json!({
        "id": 12,
        "phone": "+15550002",
        "fullName": "Grace Hopper",
        "position": "Admiral",
        "email": null,
        "birthDate": "1906-12-09",
        "bio": null,
        "registeredAt": "2024-01-15T10:30:00.123456"
    }))
    .unwrap();

    assert_eq!(user.full_name, "Grace Hopper");
    assert_eq!(user.birth_date, NaiveDate::from_ymd_opt(1906, 12, 9));
    assert!(user.registered_at.is_some());
    assert!(user.email.is_none());
}

#[test]
fn test_user_deserializes_without_registered_at() {
    let user: User = serde_json::from_value(json!({
        "id": 12,
        "phone": "+15550002",
        "fullName": "Grace Hopper",
        "position": "Admiral"
    }))
    .unwrap();

    assert!(user.registered_at.is_none());
}

#[test]
fn test_user_serializes_camel_case() {
    let value = serde_json::to_value(sample_user()).unwrap();

    assert_eq!(value["fullName"], "Ada Lovelace");
    assert!(value.get("registeredAt").is_some());
    assert!(value.get("email").is_none());
}

#[test]
fn test_apply_updates_only_present_fields() {
    let mut user = sample_user();
    let update = ProfileUpdate {
        full_name: Some("Ada King".to_string()),
        bio: Some("Analyst".to_string()),
        ..ProfileUpdate::new(user.id)
    };

    user.apply(&update);

    assert_eq!(user.full_name, "Ada King");
    assert_eq!(user.position, "Mentor");
    assert_eq!(user.bio.as_deref(), Some("Analyst"));
}

#[test]
fn test_apply_blank_email_clears_it() {
    let mut user = sample_user();
    user.email = Some("ada@example.com".to_string());

    let update = ProfileUpdate {
        email: Some("  ".to_string()),
        full_name: Some("".to_string()),
        ..ProfileUpdate::new(user.id)
    };
    user.apply(&update);

    assert!(user.email.is_none());
    assert_eq!(user.full_name, "Ada Lovelace");
}

#[test]
fn test_merge_keeps_known_registration_time() {
    let known = sample_user();
    let registered_at = known.registered_at;

    let mut fresh = known.clone();
    fresh.full_name = "Ada King".to_string();
    fresh.registered_at = None;

    let merged = known.merge(fresh);

    assert_eq!(merged.full_name, "Ada King");
    assert_eq!(merged.registered_at, registered_at);
}

#[test]
fn test_merge_reads_blank_email_and_bio_as_unset() {
    let known = User {
        email: Some("ada@example.com".to_string()),
        ..sample_user()
    };

    let fresh: User = serde_json::from_value(json!({
        "id": 7,
        "phone": "+15550001",
        "fullName": "Ada Lovelace",
        "position": "Mentor",
        "email": "",
        "bio": "  "
    }))
    .unwrap();

    let merged = known.merge(fresh);

    assert_eq!(merged.email, None);
    assert_eq!(merged.bio, None);
}
