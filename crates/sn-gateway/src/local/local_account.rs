use serde::{Deserialize, Serialize};
use sn_core::User;

/// A user record in the standalone store, with the password kept beside it.
///
/// Passwords are stored as typed; the standalone mode has no credential
/// protection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAccount {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

impl LocalAccount {
    pub fn matches(&self, phone: &str, password: &str) -> bool {
        self.user.phone == phone && self.password == password
    }
}
