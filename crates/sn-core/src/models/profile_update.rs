use crate::EntityId;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Partial profile patch. Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        with = "crate::timestamp::date_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn new(user_id: EntityId) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }
}
