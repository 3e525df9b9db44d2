mod file_store;
mod session_repository;

use sn_core::User;

pub(crate) fn sample_user() -> User {
    User::new(
        1700000000000,
        "+15550100".to_string(),
        "Ada Lovelace".to_string(),
        "Mentor".to_string(),
    )
}
