//! API Errors
//!
//! Failure taxonomy of the items API.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transient connectivity or server failure
    #[error("network error: {0}")]
    Network(String),
    /// Malformed request, e.g. empty title
    #[error("validation failed: {0}")]
    Validation(String),
    /// Target id no longer exists server-side
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, detail: &str) -> Self {
        let detail = if detail.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, detail)
        };
        match status {
            404 => ApiError::not_found(detail),
            400 | 422 => ApiError::validation(detail),
            _ => ApiError::network(detail),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::from_status(status.as_u16(), ""),
            None => ApiError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(400, "title"), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(422, ""), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(500, ""), ApiError::Network(_)));
        assert!(matches!(ApiError::from_status(503, ""), ApiError::Network(_)));
    }

    #[test]
    fn test_status_detail_in_message() {
        assert_eq!(
            ApiError::from_status(400, "title is required").to_string(),
            "validation failed: HTTP 400: title is required"
        );
        assert_eq!(ApiError::from_status(404, "").to_string(), "not found: HTTP 404");
    }
}
