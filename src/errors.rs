use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArcadeError {
    #[error("Please login to track your progress!")]
    Unauthenticated,

    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Rejected(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ArcadeError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn storage(err: impl std::error::Error) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Network(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Api { .. } | Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::Rejected(_) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ArcadeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for ArcadeError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err)
    }
}

impl axum::response::IntoResponse for ArcadeError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
