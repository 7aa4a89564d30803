//! # Paylink Error Types
//!
//! Typed error handling for the Paylink SDK.
//! All gateway operations return `Result<T, PaylinkError>`.

use thiserror::Error;

/// Core error type for all Paylink operations
#[derive(Debug, Error)]
pub enum PaylinkError {
    /// Configuration errors (missing credentials, invalid environment)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication failed (token missing or empty in auth response)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Invalid request data (malformed or empty product list)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The gateway returned a success status with no usable body
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// The gateway returned a non-success HTTP status
    #[error("Gateway error: {message}, Status code: {status_code}")]
    Gateway { message: String, status_code: u16 },

    /// HTTP method not supported by the transport (GET and POST only)
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Transport-level failure before any HTTP status exists
    /// (DNS, TLS, connection reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaylinkError {
    /// Returns true if retrying the operation may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            PaylinkError::Network(_) => true,
            PaylinkError::Gateway { status_code, .. } => {
                *status_code == 429 || *status_code >= 500
            }
            _ => false,
        }
    }

    /// Returns the HTTP status code appropriate for surfacing this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaylinkError::Configuration(_) => 500,
            PaylinkError::Authentication(_) => 401,
            PaylinkError::InvalidArgument(_) => 400,
            PaylinkError::EmptyResponse(_) => 502,
            PaylinkError::Gateway { status_code, .. } => *status_code,
            PaylinkError::UnsupportedMethod(_) => 500,
            PaylinkError::Network(_) => 503,
            PaylinkError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for Paylink operations
pub type PaylinkResult<T> = Result<T, PaylinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PaylinkError::Network("timeout".into()).is_retryable());
        assert!(PaylinkError::Gateway {
            message: "upstream down".into(),
            status_code: 503
        }
        .is_retryable());
        assert!(PaylinkError::Gateway {
            message: "slow down".into(),
            status_code: 429
        }
        .is_retryable());
        assert!(!PaylinkError::Gateway {
            message: "bad request".into(),
            status_code: 400
        }
        .is_retryable());
        assert!(!PaylinkError::InvalidArgument("bad product".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaylinkError::InvalidArgument("test".into()).status_code(),
            400
        );
        assert_eq!(
            PaylinkError::Authentication("no token".into()).status_code(),
            401
        );
        assert_eq!(
            PaylinkError::Gateway {
                message: "nope".into(),
                status_code: 422
            }
            .status_code(),
            422
        );
    }

    #[test]
    fn test_gateway_error_display() {
        let err = PaylinkError::Gateway {
            message: "Bad Request".into(),
            status_code: 400,
        };
        assert_eq!(err.to_string(), "Gateway error: Bad Request, Status code: 400");
    }
}
