use crate::tests::{context, sign_up};
use crate::{Notice, RegisterController, Route, Transition};

use sn_core::DEFAULT_POSITION;
use sn_gateway::LocalAccount;
use sn_store::{JsonStore, keys};

#[tokio::test]
async fn test_register_logs_in_with_default_position() {
    let (ctx, _store) = context();

    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;

    assert_eq!(user.position, DEFAULT_POSITION);
    assert_eq!(user.full_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_register_duplicate_phone_keeps_one_record() {
    let (ctx, store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;

    let mut view = RegisterController::new(ctx);
    view.form.phone = "+15550001".to_string();
    view.form.full_name = "Someone Else".to_string();
    view.form.password = "another1".to_string();

    assert_eq!(view.submit().await, Transition::Stay);
    assert_eq!(
        view.notice(),
        Some(&Notice::error("A user with this phone number already exists"))
    );

    let accounts: Vec<LocalAccount> = store.get_list(keys::USERS).unwrap();
    assert_eq!(accounts.len(), 1);
}

#[tokio::test]
async fn test_register_short_password_rejected_locally() {
    let (ctx, store) = context();

    let mut view = RegisterController::new(ctx.clone());
    view.form.phone = "+15550001".to_string();
    view.form.full_name = "Ada".to_string();
    view.form.password = "12345".to_string();

    assert_eq!(view.submit().await, Transition::Stay);
    assert_eq!(
        view.notice(),
        Some(&Notice::error("Password must be at least 6 characters"))
    );
    assert!(store.is_empty());
    assert_eq!(view.go_to_login(), Transition::Navigate(Route::Login));
}

#[tokio::test]
async fn test_register_missing_name_rejected_locally() {
    let (ctx, _store) = context();

    let mut view = RegisterController::new(ctx);
    view.form.phone = "+15550001".to_string();
    view.form.password = "secret1".to_string();

    assert_eq!(view.submit().await, Transition::Stay);
    assert_eq!(
        view.notice(),
        Some(&Notice::error("Fill in all required fields"))
    );
}
