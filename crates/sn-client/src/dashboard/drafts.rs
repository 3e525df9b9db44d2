use sn_core::EntityId;
use sn_core::validation::is_blank;

/// Unsent text in the dashboard inputs.
#[derive(Debug, Clone, Default)]
pub struct Drafts {
    pub post: String,
    pub message: String,
    /// Private recipient. None sends to everyone.
    pub message_to: Option<EntityId>,
    pub group_name: String,
    pub group_description: String,
}

impl Drafts {
    /// Description to send, or None when the field was left blank.
    pub(crate) fn group_description(&self) -> Option<&str> {
        if is_blank(&self.group_description) {
            None
        } else {
            Some(self.group_description.trim())
        }
    }

    pub(crate) fn clear_group(&mut self) {
        self.group_name.clear();
        self.group_description.clear();
    }
}
