use crate::{EntityId, ProfileUpdate};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered member. `phone` is the unique identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub phone: String,
    pub full_name: String,
    #[serde(default)]
    pub position: String,

    /// Absent from profile-update responses; see [`User::merge`].
    #[serde(
        default,
        with = "crate::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        with = "crate::timestamp::date_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
}

impl User {
    pub fn new(id: EntityId, phone: String, full_name: String, position: String) -> Self {
        Self {
            id,
            phone,
            full_name,
            position,
            registered_at: Some(Utc::now()),
            bio: None,
            email: None,
            birth_date: None,
        }
    }

    /// Apply a partial profile patch in place.
    ///
    /// Blank `email` / `bio` values clear the field; blank `full_name` and
    /// `position` are ignored.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = non_blank(update.full_name.as_deref()) {
            self.full_name = name;
        }
        if let Some(position) = non_blank(update.position.as_deref()) {
            self.position = position;
        }
        if let Some(ref email) = update.email {
            self.email = non_blank(Some(email.as_str()));
        }
        if let Some(ref bio) = update.bio {
            self.bio = non_blank(Some(bio.as_str()));
        }
        if update.birth_date.is_some() {
            self.birth_date = update.birth_date;
        }
    }

    /// Combine a fresher copy of this user (e.g. a profile-update response)
    /// with what is already known. Fields the fresh copy omits are kept, and
    /// blank email or bio read as unset.
    pub fn merge(self, fresh: User) -> User {
        User {
            registered_at: fresh.registered_at.or(self.registered_at),
            email: non_blank(fresh.email.as_deref()),
            bio: non_blank(fresh.bio.as_deref()),
            ..fresh
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
