use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    FriendRequest,
    Message,
    GroupInvite,
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FriendRequest => "friend_request",
            Self::Message => "message",
            Self::GroupInvite => "group_invite",
        }
    }
}

impl FromStr for NotificationType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "friend_request" => Ok(Self::FriendRequest),
            "message" => Ok(Self::Message),
            "group_invite" => Ok(Self::GroupInvite),
            _ => Err(CoreError::InvalidNotificationType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
