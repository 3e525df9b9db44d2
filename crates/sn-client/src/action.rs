/// User-visible operations, named so a transport failure can say which one
/// did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Register,
    LogIn,
    LoadPosts,
    LoadMessages,
    LoadGroups,
    LoadNotifications,
    LoadFriends,
    PublishPost,
    SendMessage,
    CreateGroup,
    UpdateProfile,
}

impl Action {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::LogIn => "log in",
            Self::LoadPosts => "load the feed",
            Self::LoadMessages => "load messages",
            Self::LoadGroups => "load groups",
            Self::LoadNotifications => "load notifications",
            Self::LoadFriends => "load friends",
            Self::PublishPost => "publish the post",
            Self::SendMessage => "send the message",
            Self::CreateGroup => "create the group",
            Self::UpdateProfile => "update the profile",
        }
    }
}
