use crate::local::id_sequence::next_id;
use crate::{
    AuthApi, GatewayError, GatewayResult, GroupsApi, LocalAccount, MSG_BAD_CREDENTIALS,
    MSG_DUPLICATE_PHONE, MSG_GROUP_FIELDS, MSG_LOGIN_FIELDS, MSG_MESSAGE_FIELDS,
    MSG_POST_FIELDS, MSG_REQUIRED_FIELDS, MSG_USER_NOT_FOUND, MessagesApi, NotificationsApi,
    PostsApi, RegisterRequest,
};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use sn_core::validation::is_blank;
use sn_core::{
    DEFAULT_POSITION, EntityId, Group, Message, Notification, Post, ProfileUpdate, User,
};
use sn_store::{JsonStore, KeyValueStore, keys};

/// Standalone gateway: every resource lives in the local key-value store.
///
/// Mirrors what the remote endpoints do, so the two can be swapped behind
/// [`crate::Gateway`]. Each operation is a read-modify-write of one key;
/// concurrent writers sharing the store get last-write-wins.
pub struct LocalGateway {
    store: Arc<dyn KeyValueStore>,
}

impl LocalGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn accounts(&self) -> GatewayResult<Vec<LocalAccount>> {
        Ok(self.store.get_list(keys::USERS)?)
    }

    #[track_caller]
    fn find_user(&self, user_id: EntityId) -> GatewayResult<User> {
        self.accounts()?
            .into_iter()
            .find(|a| a.user.id == user_id)
            .map(|a| a.user)
            .ok_or_else(|| GatewayError::rejected(MSG_USER_NOT_FOUND))
    }
}

#[async_trait]
impl AuthApi for LocalGateway {
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<User> {
        let phone = request.phone.trim();
        if is_blank(phone) || is_blank(&request.full_name) || is_blank(&request.password) {
            return Err(GatewayError::rejected(MSG_REQUIRED_FIELDS));
        }

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.user.phone == phone) {
            return Err(GatewayError::rejected(MSG_DUPLICATE_PHONE));
        }

        let position = if is_blank(&request.position) {
            DEFAULT_POSITION.to_string()
        } else {
            request.position.trim().to_string()
        };

        let id = next_id(accounts.iter().map(|a| a.user.id));
        let user = User::new(
            id,
            phone.to_string(),
            request.full_name.trim().to_string(),
            position,
        );

        accounts.push(LocalAccount {
            user: user.clone(),
            password: request.password.clone(),
        });
        self.store.set_json(keys::USERS, &accounts)?;

        info!("Registered local user {}", user.id);
        Ok(user)
    }

    async fn login(&self, phone: &str, password: &str) -> GatewayResult<User> {
        if is_blank(phone) || is_blank(password) {
            return Err(GatewayError::rejected(MSG_LOGIN_FIELDS));
        }

        self.accounts()?
            .into_iter()
            .find(|a| a.matches(phone.trim(), password))
            .map(|a| a.user)
            .ok_or_else(|| GatewayError::rejected(MSG_BAD_CREDENTIALS))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> GatewayResult<User> {
        let mut accounts = self.accounts()?;

        let account = accounts
            .iter_mut()
            .find(|a| a.user.id == update.user_id)
            .ok_or_else(|| GatewayError::rejected(MSG_USER_NOT_FOUND))?;

        account.user.apply(update);
        let user = account.user.clone();

        self.store.set_json(keys::USERS, &accounts)?;

        debug!("Updated local profile {}", user.id);
        Ok(user)
    }
}

#[async_trait]
impl PostsApi for LocalGateway {
    /// Newest first, moderated posts only.
    async fn list_posts(&self) -> GatewayResult<Vec<Post>> {
        let posts: Vec<Post> = self.store.get_list(keys::POSTS)?;
        Ok(posts.into_iter().filter(|p| p.is_moderated).collect())
    }

    async fn create_post(&self, user_id: EntityId, content: &str) -> GatewayResult<Post> {
        if is_blank(content) {
            return Err(GatewayError::rejected(MSG_POST_FIELDS));
        }

        let author = self.find_user(user_id)?;
        let mut posts: Vec<Post> = self.store.get_list(keys::POSTS)?;

        let post = Post::new(
            next_id(posts.iter().map(|p| p.id)),
            &author,
            content.to_string(),
        );
        posts.insert(0, post.clone());
        self.store.set_json(keys::POSTS, &posts)?;

        debug!("Created local post {}", post.id);
        Ok(post)
    }
}

#[async_trait]
impl MessagesApi for LocalGateway {
    /// Oldest first.
    async fn list_messages(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Message>> {
        let messages: Vec<Message> = self.store.get_list(keys::MESSAGES)?;

        Ok(messages
            .into_iter()
            .filter(|m| match user_id {
                Some(id) => m.is_visible_to(id),
                None => m.is_public(),
            })
            .collect())
    }

    async fn send_message(
        &self,
        from_user_id: EntityId,
        content: &str,
        to_user_id: Option<EntityId>,
    ) -> GatewayResult<Message> {
        if is_blank(content) {
            return Err(GatewayError::rejected(MSG_MESSAGE_FIELDS));
        }

        let sender = self.find_user(from_user_id)?;
        let mut messages: Vec<Message> = self.store.get_list(keys::MESSAGES)?;

        let message = Message::new(
            next_id(messages.iter().map(|m| m.id)),
            &sender,
            content.to_string(),
            to_user_id,
        );
        messages.push(message.clone());
        self.store.set_json(keys::MESSAGES, &messages)?;

        debug!("Stored local message {}", message.id);
        Ok(message)
    }
}

#[async_trait]
impl GroupsApi for LocalGateway {
    async fn list_groups(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Group>> {
        let groups: Vec<Group> = self.store.get_list(keys::GROUPS)?;

        Ok(match user_id {
            Some(id) => groups.into_iter().filter(|g| g.is_member(id)).collect(),
            None => groups,
        })
    }

    async fn create_group(
        &self,
        user_id: EntityId,
        name: &str,
        description: Option<&str>,
    ) -> GatewayResult<Group> {
        if is_blank(name) {
            return Err(GatewayError::rejected(MSG_GROUP_FIELDS));
        }

        let creator = self.find_user(user_id)?;
        let mut groups: Vec<Group> = self.store.get_list(keys::GROUPS)?;

        let group = Group::new(
            next_id(groups.iter().map(|g| g.id)),
            name.trim().to_string(),
            description.unwrap_or_default().trim().to_string(),
            creator.id,
        );
        groups.push(group.clone());
        self.store.set_json(keys::GROUPS, &groups)?;

        debug!("Created local group {}", group.id);
        Ok(group)
    }
}

#[async_trait]
impl NotificationsApi for LocalGateway {
    async fn list_notifications(&self, _user_id: EntityId) -> GatewayResult<Vec<Notification>> {
        Ok(self.store.get_list(keys::NOTIFICATIONS)?)
    }

    async fn list_friends(&self, user_id: EntityId) -> GatewayResult<Vec<EntityId>> {
        Ok(self.store.get_list(&keys::friends(user_id))?)
    }
}
