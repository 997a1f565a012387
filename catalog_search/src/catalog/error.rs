// catalog/error.rs - Error types for the catalog search flow
//
// Three kinds of failure exist and each is handled differently:
// - ValidationError: local, blocks the request, shown next to the price inputs
// - BackendError: transport or decoding failure talking to the course backend
// - SearchFailure: what the results region shows after a failed search

use thiserror::Error;

/// Facet combination that cannot be turned into a request
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("minimum price cannot exceed maximum price")]
    MinPriceExceedsMax { min: f64, max: f64 },
}

/// Failure talking to the course backend
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request to course backend failed: {0}")]
    Transport(String),
    #[error("course backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode backend response: {0}")]
    Decode(String),
    /// A server function failed, as seen from the browser
    #[error("server error: {0}")]
    Server(String),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

/// Retryable error state of the results region
///
/// Previously displayed results stay visible while this is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFailure {
    pub message: String,
    pub retryable: bool,
}

impl From<&BackendError> for SearchFailure {
    fn from(err: &BackendError) -> Self {
        SearchFailure {
            message: err.to_string(),
            retryable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = ValidationError::MinPriceExceedsMax { min: 150.0, max: 50.0 };
        assert_eq!(err.to_string(), "minimum price cannot exceed maximum price");
    }

    #[test]
    fn test_search_failure_from_backend_error() {
        let err = BackendError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        let failure = SearchFailure::from(&err);
        assert!(failure.retryable);
        assert_eq!(failure.message, "course backend answered 503: maintenance");
    }
}
