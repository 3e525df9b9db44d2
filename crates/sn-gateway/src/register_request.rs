use serde::Serialize;

/// Registration form as sent to the auth resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub phone: String,
    pub full_name: String,
    pub position: String,
    pub password: String,
}
