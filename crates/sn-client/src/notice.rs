use serde::Serialize;

/// One-line feedback shown after an action, in place of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}
