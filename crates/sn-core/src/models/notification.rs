use crate::{EntityId, NotificationType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub from_user_id: EntityId,
    pub from_user_name: String,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}
