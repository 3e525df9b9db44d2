use crate::{
    Action, ClientContext, ClientError, ClientResult, Drafts, Mount, Notice, Panel, ProfileForm,
    Route, Transition,
};

use std::cmp::Reverse;

use log::{debug, info, warn};
use sn_core::validation::is_blank;
use sn_core::{EntityId, Group, Message, Notification, Post, User};
use sn_gateway::{AuthApi, GroupsApi, MessagesApi, NotificationsApi, PostsApi};

/// The authenticated view: feed, chat, groups, notifications and profile.
///
/// Sequences are loaded once on mount. Entities created afterwards are
/// inserted from the gateway response without re-fetching.
pub struct DashboardController {
    ctx: ClientContext,
    user: User,
    posts: Vec<Post>,
    messages: Vec<Message>,
    groups: Vec<Group>,
    notifications: Vec<Notification>,
    friends: Vec<EntityId>,
    active_panel: Option<Panel>,
    notice: Option<Notice>,
    pub drafts: Drafts,
    pub profile_form: ProfileForm,
}

impl DashboardController {
    /// Opens the dashboard for the session user, or redirects to the entry
    /// view when there is none.
    pub async fn mount(ctx: ClientContext) -> Mount {
        let user = match ctx.session.load() {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("No session, redirecting to {}", Route::Register.path());
                return Mount::Redirect(Route::Register);
            }
            Err(e) => {
                warn!("Could not read session: {e}");
                return Mount::Redirect(Route::Register);
            }
        };

        let mut dashboard = Self {
            ctx,
            profile_form: ProfileForm::from_user(&user),
            user,
            posts: Vec::new(),
            messages: Vec::new(),
            groups: Vec::new(),
            notifications: Vec::new(),
            friends: Vec::new(),
            active_panel: None,
            notice: None,
            drafts: Drafts::default(),
        };
        dashboard.load().await;

        Mount::Ready(Box::new(dashboard))
    }

    /// A failed load leaves its sequence empty and shows a notice.
    async fn load(&mut self) {
        let user_id = self.user.id;
        let gateway = self.ctx.gateway.clone();

        match gateway.list_posts().await {
            Ok(mut posts) => {
                posts.sort_by_key(|p| Reverse(p.id));
                self.posts = posts;
            }
            Err(e) => self.fail(ClientError::gateway(Action::LoadPosts, e)),
        }

        match gateway.list_messages(Some(user_id)).await {
            Ok(mut messages) => {
                messages.sort_by_key(|m| m.id);
                self.messages = messages;
            }
            Err(e) => self.fail(ClientError::gateway(Action::LoadMessages, e)),
        }

        match gateway.list_groups(Some(user_id)).await {
            Ok(mut groups) => {
                groups.sort_by_key(|g| g.id);
                self.groups = groups;
            }
            Err(e) => self.fail(ClientError::gateway(Action::LoadGroups, e)),
        }

        match gateway.list_notifications(user_id).await {
            Ok(notifications) => self.notifications = notifications,
            Err(e) => self.fail(ClientError::gateway(Action::LoadNotifications, e)),
        }

        match gateway.list_friends(user_id).await {
            Ok(friends) => self.friends = friends,
            Err(e) => self.fail(ClientError::gateway(Action::LoadFriends, e)),
        }

        debug!(
            "Dashboard loaded: {} posts, {} messages, {} groups",
            self.posts.len(),
            self.messages.len(),
            self.groups.len()
        );
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Oldest first.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn friends(&self) -> &[EntityId] {
        &self.friends
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn active_panel(&self) -> Option<Panel> {
        self.active_panel
    }

    /// Opening the profile panel resets the form to the session user.
    pub fn open_panel(&mut self, panel: Panel) {
        if panel == Panel::Profile {
            self.profile_form = ProfileForm::from_user(&self.user);
        }
        self.active_panel = Some(panel);
    }

    pub fn close_panel(&mut self) {
        self.active_panel = None;
    }

    pub async fn create_post(&mut self) {
        if is_blank(&self.drafts.post) {
            return;
        }

        let result = self
            .ctx
            .gateway
            .create_post(self.user.id, &self.drafts.post)
            .await;

        match result {
            Ok(post) => {
                self.posts.insert(0, post);
                self.drafts.post.clear();
                self.succeed("Post published!");
            }
            Err(e) => self.fail(ClientError::gateway(Action::PublishPost, e)),
        }
    }

    pub async fn send_message(&mut self) {
        if is_blank(&self.drafts.message) {
            return;
        }

        let result = self
            .ctx
            .gateway
            .send_message(self.user.id, &self.drafts.message, self.drafts.message_to)
            .await;

        match result {
            Ok(message) => {
                self.messages.push(message);
                self.drafts.message.clear();
                self.succeed("Message sent!");
            }
            Err(e) => self.fail(ClientError::gateway(Action::SendMessage, e)),
        }
    }

    pub async fn create_group(&mut self) {
        if is_blank(&self.drafts.group_name) {
            return;
        }

        let result = self
            .ctx
            .gateway
            .create_group(
                self.user.id,
                self.drafts.group_name.trim(),
                self.drafts.group_description(),
            )
            .await;

        match result {
            Ok(group) => {
                self.groups.push(group);
                self.drafts.clear_group();
                self.succeed("Group created!");
            }
            Err(e) => self.fail(ClientError::gateway(Action::CreateGroup, e)),
        }
    }

    pub async fn update_profile(&mut self) {
        match self.save_profile().await {
            Ok(()) => {
                self.active_panel = None;
                self.succeed("Profile updated!");
            }
            Err(e) => self.fail(e),
        }
    }

    async fn save_profile(&mut self) -> ClientResult<()> {
        let update = self.profile_form.to_update(self.user.id)?;

        let fresh = self
            .ctx
            .gateway
            .update_profile(&update)
            .await
            .map_err(|e| ClientError::gateway(Action::UpdateProfile, e))?;

        let user = self.user.clone().merge(fresh);
        self.ctx.session.save(&user)?;

        self.profile_form = ProfileForm::from_user(&user);
        self.user = user;
        Ok(())
    }

    /// Clears the session. Stays on the dashboard if that fails.
    pub fn logout(&mut self) -> Transition {
        match self.ctx.session.clear() {
            Ok(()) => {
                info!("User {} logged out", self.user.id);
                Transition::Navigate(Route::Register)
            }
            Err(e) => {
                self.fail(e.into());
                Transition::Stay
            }
        }
    }

    fn succeed(&mut self, message: &str) {
        self.notice = Some(Notice::success(message));
    }

    fn fail(&mut self, error: ClientError) {
        warn!("{error}");
        self.notice = Some(Notice::error(error.user_message()));
    }
}
