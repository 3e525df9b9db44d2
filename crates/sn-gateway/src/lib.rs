//! Resource Gateway: one boundary object per remote resource group, with a
//! networked (HTTP) and a standalone (local store) implementation.

pub mod api;
pub mod error;
pub mod http;
pub mod local;
pub mod register_request;


pub use api::{AuthApi, Gateway, GroupsApi, MessagesApi, NotificationsApi, PostsApi};
pub use error::{GatewayError, Result as GatewayResult};
pub use http::http_gateway::HttpGateway;
pub use local::local_account::LocalAccount;
pub use local::local_gateway::LocalGateway;
pub use register_request::RegisterRequest;

pub(crate) const MSG_REQUIRED_FIELDS: &str = "Fill in all required fields";
pub(crate) const MSG_LOGIN_FIELDS: &str = "Fill in all fields";
pub(crate) const MSG_DUPLICATE_PHONE: &str = "A user with this phone number already exists";
pub(crate) const MSG_BAD_CREDENTIALS: &str = "Invalid phone number or password";
pub(crate) const MSG_USER_NOT_FOUND: &str = "User not found";
pub(crate) const MSG_POST_FIELDS: &str = "User ID and content are required";
pub(crate) const MSG_MESSAGE_FIELDS: &str = "Sender and content are required";
pub(crate) const MSG_GROUP_FIELDS: &str = "Name and user ID are required";
