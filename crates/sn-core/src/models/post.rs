use crate::{EntityId, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub user_id: EntityId,
    pub user_name: String,
    #[serde(default)]
    pub user_position: String,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_moderated: bool,
}

impl Post {
    /// New post authored by `author`. Posts are published pre-moderated.
    pub fn new(id: EntityId, author: &User, content: String) -> Self {
        Self {
            id,
            user_id: author.id,
            user_name: author.full_name.clone(),
            user_position: author.position.clone(),
            content,
            timestamp: Utc::now(),
            is_moderated: true,
        }
    }
}
