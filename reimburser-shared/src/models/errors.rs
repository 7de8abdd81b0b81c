use thiserror::Error;

/// Failures surfaced by the API client.
///
/// Every variant carries the user-facing message: the server's own text when
/// it supplied one, otherwise a status-derived fallback. Views render the
/// message; they never inspect transport details.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bad credentials at login.
    #[error("{0}")]
    Authentication(String),

    /// The server rejected the submitted data (e.g. duplicate username).
    #[error("{0}")]
    Validation(String),

    /// A protected call was made without a valid session cookie.
    #[error("{0}")]
    Unauthorized(String),

    /// The targeted record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A client-side guard rejected the call before it reached the network.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request could not complete at all.
    #[error("{0}")]
    Network(String),

    /// Any other unexpected server response.
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Map an HTTP status code and message onto the taxonomy.
    ///
    /// `message` should be the server's body text when non-empty; callers
    /// pass a generic fallback otherwise.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            400 | 409 | 422 => Self::Validation(message),
            404 => Self::NotFound(message),
            _ => Self::Server(message),
        }
    }

    /// The message to show the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication(message)
            | Self::Validation(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::InvalidArgument(message)
            | Self::Network(message)
            | Self::Server(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_unauthorized() {
        let error = ApiError::from_status(401, "no session".to_string());
        assert_eq!(error, ApiError::Unauthorized("no session".to_string()));
    }

    #[test]
    fn test_from_status_validation() {
        for status in [400, 409, 422] {
            let error = ApiError::from_status(status, "username taken".to_string());
            assert_eq!(error, ApiError::Validation("username taken".to_string()));
        }
    }

    #[test]
    fn test_from_status_not_found() {
        let error = ApiError::from_status(404, "no such reimbursement".to_string());
        assert_eq!(
            error,
            ApiError::NotFound("no such reimbursement".to_string())
        );
    }

    #[test]
    fn test_from_status_fallback() {
        let error = ApiError::from_status(500, "boom".to_string());
        assert_eq!(error, ApiError::Server("boom".to_string()));
    }

    #[test]
    fn test_display_is_the_message() {
        let error = ApiError::InvalidArgument("missing reimbursement id".to_string());
        assert_eq!(error.to_string(), "missing reimbursement id");
        assert_eq!(error.message(), "missing reimbursement id");
    }

    #[test]
    fn test_error_trait_object() {
        let error = ApiError::Network("unable to reach the server".to_string());
        let as_std: &dyn std::error::Error = &error;
        assert_eq!(as_std.to_string(), "unable to reach the server");
    }
}
