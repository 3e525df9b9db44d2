use crate::{GatewayResult, RegisterRequest};

use async_trait::async_trait;
use sn_core::{EntityId, Group, Message, Notification, Post, ProfileUpdate, User};

/// Registration, login and profile changes.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<User>;

    async fn login(&self, phone: &str, password: &str) -> GatewayResult<User>;

    async fn update_profile(&self, update: &ProfileUpdate) -> GatewayResult<User>;
}

/// The news feed.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> GatewayResult<Vec<Post>>;

    async fn create_post(&self, user_id: EntityId, content: &str) -> GatewayResult<Post>;
}

#[async_trait]
pub trait MessagesApi: Send + Sync {
    /// With a user, returns public messages plus those to or from them.
    /// Without one, only public messages.
    async fn list_messages(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Message>>;

    async fn send_message(
        &self,
        from_user_id: EntityId,
        content: &str,
        to_user_id: Option<EntityId>,
    ) -> GatewayResult<Message>;
}

#[async_trait]
pub trait GroupsApi: Send + Sync {
    /// With a user, returns the groups they created or belong to.
    async fn list_groups(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Group>>;

    async fn create_group(
        &self,
        user_id: EntityId,
        name: &str,
        description: Option<&str>,
    ) -> GatewayResult<Group>;
}

/// Notifications and friend lists. Only the standalone store keeps them;
/// the defaults report nothing.
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    async fn list_notifications(&self, _user_id: EntityId) -> GatewayResult<Vec<Notification>> {
        Ok(Vec::new())
    }

    async fn list_friends(&self, _user_id: EntityId) -> GatewayResult<Vec<EntityId>> {
        Ok(Vec::new())
    }
}

/// Every resource group behind one object.
pub trait Gateway: AuthApi + PostsApi + MessagesApi + GroupsApi + NotificationsApi {}

impl<T> Gateway for T where T: AuthApi + PostsApi + MessagesApi + GroupsApi + NotificationsApi {}
