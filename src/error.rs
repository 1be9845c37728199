//! Error types for the Baidu Push API client.
//!
//! Every failure is reported once to the immediate caller. Nothing is
//! retried or swallowed inside the crate.

use thiserror::Error;

use crate::error_code;

/// A specialized `Result` type for push service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all push service operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An optional parameter is not permitted for the operation, or a
    /// mandatory argument is out of range. Detected locally before any
    /// network traffic.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The parameter validator has no registry entry for this operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The HTTP round trip failed (connectivity, DNS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON, or a field had the wrong type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response envelope is missing required content
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The service reported an `error_code` in the response envelope.
    #[error("Server error {code}: {message}")]
    Server {
        /// Numeric error code from the envelope
        code: i64,
        /// Description from the error catalog
        message: String,
        /// Request identifier the server assigned to the failed call
        request_id: Option<u64>,
    },

    /// The envelope succeeded but an inner result code signals failure.
    #[error("Operation failed with code {code}: {message}")]
    BusinessFailure {
        /// Inner result code
        code: i64,
        /// What failed
        message: String,
    },

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a server error for `code`, resolving its description through
    /// the error catalog.
    pub(crate) fn from_error_code(code: i64, request_id: Option<u64>) -> Self {
        let message = match error_code::describe(code) {
            Some(description) => description.to_string(),
            None => format!("unknown error code {}", code),
        };

        Error::Server {
            code,
            message,
            request_id,
        }
    }

    /// The server error code, if this error came from the response envelope.
    pub fn server_code(&self) -> Option<i64> {
        match self {
            Error::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if the service rejected the request signature or key.
    pub fn is_auth_error(&self) -> bool {
        self.server_code() == Some(error_code::AUTHENTICATION_FAILED)
    }

    /// Returns `true` if the service rejected the call for being too frequent.
    ///
    /// The service does not send a retry-after hint; callers decide how long
    /// to wait.
    pub fn is_rate_limited(&self) -> bool {
        self.server_code() == Some(error_code::TOO_FREQUENT)
    }

    /// Returns `true` if the error was detected locally, before a request
    /// reached the network.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter(_)
                | Error::UnknownOperation(_)
                | Error::UrlParse(_)
                | Error::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_message() {
        let err = Error::from_error_code(30611, Some(42));
        match err {
            Error::Server {
                code,
                ref message,
                request_id,
            } => {
                assert_eq!(code, 30611);
                assert_eq!(message, "tag not found");
                assert_eq!(request_id, Some(42));
            }
            _ => panic!("Expected Server error"),
        }
        assert_eq!(err.to_string(), "Server error 30611: tag not found");
    }

    #[test]
    fn test_unknown_code_message() {
        let err = Error::from_error_code(30614, None);
        assert_eq!(err.server_code(), Some(30614));
        assert_eq!(err.to_string(), "Server error 30614: unknown error code 30614");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::from_error_code(30603, None).is_auth_error());
        assert!(Error::from_error_code(30699, None).is_rate_limited());
        assert!(!Error::from_error_code(30611, None).is_auth_error());
        assert!(Error::InvalidParameter("x".into()).is_client_error());
        assert!(!Error::MalformedResponse("x".into()).is_client_error());
        assert_eq!(Error::Config("x".into()).server_code(), None);
    }
}
