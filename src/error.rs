//! Error types for backend calls and user actions.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the REST backend layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed (connection refused, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Token missing, expired, or rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// Non-success status other than 401/403.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short message suitable for a toast.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Unauthorized => "Your session has expired. Please log in again.",
            Self::Status { .. } | Self::Decode(_) => "Something went wrong. Please try again.",
        }
    }

    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            _ => Self::Status { status, message },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Why a user action did not complete.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no items selected")]
    EmptySelection,

    #[error("not signed in")]
    NotAuthenticated,

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Rejected before any request was sent
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Api(_))
    }

    /// Text for the toast shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptySelection => "Select at least one item first.".to_string(),
            Self::NotAuthenticated => "Please log in first.".to_string(),
            Self::InvalidInput(message) => message.clone(),
            Self::Api(err) => err.user_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(ApiError::from_status(401, String::new()), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(403, String::new()), ApiError::Unauthorized));
        match ApiError::from_status(500, "boom".into()) {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_local_vs_backend() {
        assert!(ActionError::EmptySelection.is_local());
        assert!(ActionError::NotAuthenticated.is_local());
        assert!(ActionError::InvalidInput("bad price".into()).is_local());
        assert!(!ActionError::from(ApiError::Unauthorized).is_local());
        assert_eq!(ActionError::from(ApiError::Unauthorized).to_string(), "unauthorized");
        assert_eq!(
            ActionError::from(ApiError::Network("refused".into())).user_message(),
            "Could not reach the server. Please check your connection."
        );
        assert_eq!(ActionError::InvalidInput("Price must be a non-negative amount".into()).user_message(), "Price must be a non-negative amount");
    }
}
