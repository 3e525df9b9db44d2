mod dashboard;
mod profile_form;
mod register;

use crate::{ClientContext, RegisterController, Transition};

use std::sync::Arc;

use sn_core::User;
use sn_store::MemoryStore;

/// Standalone context over a fresh in-memory store.
pub(crate) fn context() -> (ClientContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ClientContext::standalone(store.clone()), store)
}

/// Registers through the controller, leaving the new user logged in.
pub(crate) async fn sign_up(ctx: &ClientContext, phone: &str, name: &str) -> User {
    let mut view = RegisterController::new(ctx.clone());
    view.form.phone = phone.to_string();
    view.form.full_name = name.to_string();
    view.form.password = "secret1".to_string();

    assert_eq!(view.submit().await, Transition::Navigate(crate::Route::Dashboard));
    ctx.current_user().unwrap().unwrap()
}
