use crate::{ClientError, ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sn_core::validation::{is_blank, parse_birth_date};
use sn_core::{EntityId, ProfileUpdate, User};

/// Editable copy of the profile, prefilled from the session user.
///
/// `birth_date` is kept as typed (`YYYY-MM-DD`) and parsed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub position: String,
    pub email: String,
    pub birth_date: String,
    pub bio: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            position: user.position.clone(),
            email: user.email.clone().unwrap_or_default(),
            birth_date: user
                .birth_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }

    /// Blank email and bio are sent so they clear the stored value; a blank
    /// position or birth date is left out.
    #[track_caller]
    pub fn to_update(&self, user_id: EntityId) -> ClientResult<ProfileUpdate> {
        if is_blank(&self.full_name) {
            return Err(ClientError::Validation {
                message: "Full name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ProfileUpdate {
            user_id,
            full_name: Some(self.full_name.trim().to_string()),
            position: Some(self.position.trim())
                .filter(|p| !p.is_empty())
                .map(String::from),
            email: Some(self.email.trim().to_string()),
            birth_date: parse_birth_date(&self.birth_date)?,
            bio: Some(self.bio.trim().to_string()),
        })
    }
}
