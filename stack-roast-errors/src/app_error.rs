use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate vote: You have already voted on this roast")]
    DuplicateVote,

    #[error("Database error: {0}")]
    Database(String),

    #[error("AI provider error: {message}")]
    AiProvider { status: Option<u16>, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    /// Rebuilds an error from its `Display` form, e.g. after it crossed a
    /// server function boundary as a plain string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = if let Some(rest) = s.strip_prefix("Validation failed: ") {
            AppError::Validation(rest.to_string())
        } else if let Some(rest) = s.strip_prefix("Not found: ") {
            AppError::NotFound(rest.to_string())
        } else if s.starts_with("Duplicate vote") {
            AppError::DuplicateVote
        } else if let Some(rest) = s.strip_prefix("Database error: ") {
            AppError::Database(rest.to_string())
        } else if let Some(rest) = s.strip_prefix("AI provider error: ") {
            AppError::AiProvider {
                status: None,
                message: rest.to_string(),
            }
        } else if let Some(rest) = s.strip_prefix("Configuration error: ") {
            AppError::Configuration(rest.to_string())
        } else if let Some(rest) = s.strip_prefix("Rate limited: ") {
            AppError::RateLimited(rest.to_string())
        } else if let Some(rest) = s.strip_prefix("Internal error: ") {
            AppError::Internal(rest.to_string())
        } else {
            AppError::Internal(s.to_string())
        };
        Ok(err)
    }
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The message placed in JSON error bodies.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Database(msg)
            | Self::Configuration(msg)
            | Self::RateLimited(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::DuplicateVote => "You have already voted on this roast".to_string(),
            Self::AiProvider { message, .. } => message.clone(),
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
            Self::NotFound(msg) => msg,
            Self::DuplicateVote => "You already voted on this roast. One vote per roast!",
            Self::Database(_) => "The database is having a moment. Try again soon.",
            Self::AiProvider { .. } => "The AI roaster is busy. Try again later.",
            Self::Configuration(_) => "This feature is not configured on the server.",
            Self::RateLimited(msg) => msg,
            Self::Internal(_) => "Something went wrong on our side. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Validation(_) | AppError::DuplicateVote => StatusCode::BAD_REQUEST,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                AppError::AiProvider {
                    status: Some(code), ..
                } => StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                AppError::AiProvider { status: None, .. }
                | AppError::Database(_)
                | AppError::Configuration(_)
                | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            (status, Json(ErrorResponse { error: self.message() })).into_response()
        }
    }

}
