use crate::ProfileForm;

use chrono::NaiveDate;
use sn_core::User;

fn user() -> User {
    User {
        email: Some("ada@example.com".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1815, 12, 10),
        ..User::new(1, "+15550001".into(), "Ada".into(), "Mentor".into())
    }
}

#[test]
fn test_form_prefilled_from_user() {
    let form = ProfileForm::from_user(&user());

    assert_eq!(form.full_name, "Ada");
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.birth_date, "1815-12-10");
    assert_eq!(form.bio, "");
}

#[test]
fn test_blank_birth_date_left_out() {
    let form = ProfileForm {
        birth_date: " ".to_string(),
        ..ProfileForm::from_user(&user())
    };

    let update = form.to_update(1).unwrap();

    assert_eq!(update.birth_date, None);
    assert_eq!(update.bio.as_deref(), Some(""));
}

#[test]
fn test_bad_birth_date_is_validation_error() {
    let form = ProfileForm {
        birth_date: "10/12/1815".to_string(),
        ..ProfileForm::from_user(&user())
    };

    assert!(form.to_update(1).is_err());
}

#[test]
fn test_blank_full_name_rejected() {
    let form = ProfileForm {
        full_name: "  ".to_string(),
        ..ProfileForm::from_user(&user())
    };

    let err = form.to_update(1).unwrap_err();
    assert_eq!(err.user_message(), "Full name cannot be empty");
}

#[test]
fn test_blank_position_left_out() {
    let form = ProfileForm {
        position: "   ".to_string(),
        ..ProfileForm::from_user(&user())
    };

    let update = form.to_update(1).unwrap();

    assert_eq!(update.position, None);
    assert_eq!(update.full_name.as_deref(), Some("Ada"));
}
