use crate::http::envelope;
use crate::{
    AuthApi, GatewayError, GatewayResult, GroupsApi, MessagesApi, NotificationsApi, PostsApi,
    RegisterRequest,
};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use sn_config::EndpointsConfig;
use sn_core::{EntityId, Group, Message, Post, ProfileUpdate, User};

/// Gateway over the four JSON-over-HTTP resources.
///
/// Each operation is exactly one request. There is no retry, timeout or
/// backoff; the caller decides what a failure means.
pub struct HttpGateway {
    pub endpoints: EndpointsConfig,
    client: ReqwestClient,
}

impl HttpGateway {
    pub fn new(endpoints: EndpointsConfig) -> Self {
        Self {
            endpoints: Self::trimmed(endpoints),
            client: ReqwestClient::new(),
        }
    }

    /// All four resources as sub-paths of one server
    /// (`{base}/auth`, `{base}/posts`, ...).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::new(EndpointsConfig {
            auth: format!("{base}/auth"),
            posts: format!("{base}/posts"),
            messages: format!("{base}/messages"),
            groups: format!("{base}/groups"),
        })
    }

    fn trimmed(endpoints: EndpointsConfig) -> EndpointsConfig {
        let trim = |url: String| url.trim_end_matches('/').to_string();
        EndpointsConfig {
            auth: trim(endpoints.auth),
            posts: trim(endpoints.posts),
            messages: trim(endpoints.messages),
            groups: trim(endpoints.groups),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    fn with_user_query(url: &str, user_id: Option<EntityId>) -> String {
        match user_id {
            Some(id) => format!("{url}?userId={id}"),
            None => url.to_string(),
        }
    }

    /// Sends the request and returns the body, or the rejection it carries.
    ///
    /// The body is read as JSON whatever the status, since rejections arrive
    /// with 4xx codes.
    async fn execute(&self, req: RequestBuilder) -> GatewayResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if let Some(message) = envelope::rejection(&body) {
            debug!("Rejected ({status}): {message}");
            return Err(GatewayError::rejected(message));
        }

        if !status.is_success() {
            return Err(GatewayError::status(status.as_u16()));
        }

        Ok(body)
    }
}

#[async_trait]
impl AuthApi for HttpGateway {
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<User> {
        #[derive(Serialize)]
        struct Body<'a> {
            action: &'static str,
            #[serde(flatten)]
            request: &'a RegisterRequest,
        }

        let body = Body {
            action: "register",
            request,
        };
        let req = self
            .request(Method::POST, &self.endpoints.auth)
            .json(&body);
        envelope::take_field(self.execute(req).await?, "user")
    }

    async fn login(&self, phone: &str, password: &str) -> GatewayResult<User> {
        #[derive(Serialize)]
        struct Body<'a> {
            action: &'static str,
            phone: &'a str,
            password: &'a str,
        }

        let body = Body {
            action: "login",
            phone,
            password,
        };
        let req = self
            .request(Method::POST, &self.endpoints.auth)
            .json(&body);
        envelope::take_field(self.execute(req).await?, "user")
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> GatewayResult<User> {
        let req = self
            .request(Method::PUT, &self.endpoints.auth)
            .json(update);
        envelope::take_field(self.execute(req).await?, "user")
    }
}

#[async_trait]
impl PostsApi for HttpGateway {
    async fn list_posts(&self) -> GatewayResult<Vec<Post>> {
        let req = self.request(Method::GET, &self.endpoints.posts);
        envelope::take_field(self.execute(req).await?, "posts")
    }

    async fn create_post(&self, user_id: EntityId, content: &str) -> GatewayResult<Post> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            user_id: EntityId,
            content: &'a str,
        }

        let req = self
            .request(Method::POST, &self.endpoints.posts)
            .json(&Body { user_id, content });
        envelope::take_field(self.execute(req).await?, "post")
    }
}

#[async_trait]
impl MessagesApi for HttpGateway {
    async fn list_messages(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Message>> {
        let url = Self::with_user_query(&self.endpoints.messages, user_id);
        let req = self.request(Method::GET, &url);
        envelope::take_field(self.execute(req).await?, "messages")
    }

    async fn send_message(
        &self,
        from_user_id: EntityId,
        content: &str,
        to_user_id: Option<EntityId>,
    ) -> GatewayResult<Message> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            from_user_id: EntityId,
            content: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            to_user_id: Option<EntityId>,
        }

        let body = Body {
            from_user_id,
            content,
            to_user_id,
        };
        let req = self
            .request(Method::POST, &self.endpoints.messages)
            .json(&body);
        envelope::take_field(self.execute(req).await?, "message")
    }
}

#[async_trait]
impl GroupsApi for HttpGateway {
    async fn list_groups(&self, user_id: Option<EntityId>) -> GatewayResult<Vec<Group>> {
        let url = Self::with_user_query(&self.endpoints.groups, user_id);
        let req = self.request(Method::GET, &url);
        envelope::take_field(self.execute(req).await?, "groups")
    }

    async fn create_group(
        &self,
        user_id: EntityId,
        name: &str,
        description: Option<&str>,
    ) -> GatewayResult<Group> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            user_id: EntityId,
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let body = Body {
            user_id,
            name,
            description,
        };
        let req = self
            .request(Method::POST, &self.endpoints.groups)
            .json(&body);
        envelope::take_field(self.execute(req).await?, "group")
    }
}

/// The remote service keeps no notifications or friend lists.
impl NotificationsApi for HttpGateway {}
