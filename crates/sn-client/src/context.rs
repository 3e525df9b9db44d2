use crate::ClientResult;

use std::sync::Arc;

use log::debug;
use sn_config::{Config, StorageMode};
use sn_core::User;
use sn_gateway::{Gateway, HttpGateway, LocalGateway};
use sn_store::{FileStore, KeyValueStore, SessionRepository, StoreSessionRepository};

/// Session and gateway shared by every controller.
#[derive(Clone)]
pub struct ClientContext {
    pub session: Arc<dyn SessionRepository>,
    pub gateway: Arc<dyn Gateway>,
}

impl ClientContext {
    pub fn new(session: Arc<dyn SessionRepository>, gateway: Arc<dyn Gateway>) -> Self {
        Self { session, gateway }
    }

    /// Session and every resource in the same store.
    pub fn standalone(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            session: Arc::new(StoreSessionRepository::new(store.clone())),
            gateway: Arc::new(LocalGateway::new(store)),
        }
    }

    /// Session in `store`, resources behind the remote endpoints.
    pub fn remote(store: Arc<dyn KeyValueStore>, gateway: HttpGateway) -> Self {
        Self {
            session: Arc::new(StoreSessionRepository::new(store)),
            gateway: Arc::new(gateway),
        }
    }

    /// Builds the context the configuration asks for. The session is always
    /// kept in the file store under the config dir.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(config.storage_path()?)?);

        let ctx = match config.storage.mode {
            StorageMode::Remote => {
                Self::remote(store, HttpGateway::new(config.endpoints.clone()))
            }
            StorageMode::Local => Self::standalone(store),
        };

        debug!("Client context ready ({} mode)", config.storage.mode.as_str());
        Ok(ctx)
    }

    pub fn current_user(&self) -> ClientResult<Option<User>> {
        Ok(self.session.load()?)
    }
}
