use crate::EntityId;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A user group.
///
/// Membership is an explicit id set. Endpoints that only report a head count
/// fill `member_count` and leave `members` empty, so both are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: EntityId,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub members: BTreeSet<EntityId>,
    #[serde(default)]
    pub member_count: u32,
}

impl Group {
    /// New group whose only member is its creator.
    pub fn new(id: EntityId, name: String, description: String, created_by: EntityId) -> Self {
        Self {
            id,
            name,
            description,
            created_by,
            members: BTreeSet::from([created_by]),
            member_count: 1,
        }
    }

    pub fn is_member(&self, user_id: EntityId) -> bool {
        self.created_by == user_id || self.members.contains(&user_id)
    }

    /// Best known head count.
    pub fn size(&self) -> u32 {
        self.member_count.max(self.members.len() as u32)
    }
}
