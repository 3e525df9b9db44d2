use crate::{EntityId, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message. No recipient means the message is public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub from_user_id: EntityId,
    pub from_user_name: String,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_user_id: Option<EntityId>,
}

impl Message {
    pub fn new(id: EntityId, sender: &User, content: String, to_user_id: Option<EntityId>) -> Self {
        Self {
            id,
            from_user_id: sender.id,
            from_user_name: sender.full_name.clone(),
            content,
            timestamp: Utc::now(),
            to_user_id,
        }
    }

    pub fn is_public(&self) -> bool {
        self.to_user_id.is_none()
    }

    /// Whether `user_id` may see this message: public, sent by them, or sent to them.
    pub fn is_visible_to(&self, user_id: EntityId) -> bool {
        self.is_public() || self.from_user_id == user_id || self.to_user_id == Some(user_id)
    }
}
