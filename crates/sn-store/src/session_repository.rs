use crate::{JsonStore, KeyValueStore, StoreError, StoreResult, keys};

use std::sync::Arc;

use log::{info, warn};
use sn_core::User;

/// Holds the one authenticated user.
///
/// There is no expiry, token or server-side check: whatever is stored here is
/// trusted as the current session.
pub trait SessionRepository: Send + Sync {
    /// `Ok(None)` means nobody is logged in.
    fn load(&self) -> StoreResult<Option<User>>;

    fn save(&self, user: &User) -> StoreResult<()>;

    fn clear(&self) -> StoreResult<()>;
}

/// Session kept under [`keys::CURRENT_USER`] in a [`KeyValueStore`].
pub struct StoreSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionRepository for StoreSessionRepository {
    /// A corrupted entry is set aside and reported as no session, which sends
    /// the user back through login.
    fn load(&self) -> StoreResult<Option<User>> {
        match self.store.get_json::<User>(keys::CURRENT_USER) {
            Ok(user) => Ok(user),
            Err(StoreError::Corrupted { message, .. }) => {
                warn!("Discarding corrupted session: {message}");
                self.store.discard_corrupted(keys::CURRENT_USER)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, user: &User) -> StoreResult<()> {
        self.store.set_json(keys::CURRENT_USER, user)?;
        info!("Session saved for user {}", user.id);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.store.remove(keys::CURRENT_USER)?;
        info!("Session cleared");
        Ok(())
    }
}
