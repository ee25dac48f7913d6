//! Error types for the Darwin client

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Authentication failure (401 or 403)
    #[error("Authentication failed (status {status}): {message}")]
    Auth {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {retry_after:?})")]
    RateLimit {
        /// How long the server asked us to wait
        retry_after: Option<Duration>,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Server error (5xx status codes)
    #[error("Server error (status {status}): {message}")]
    Server {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Client error (4xx status codes other than auth/rate limit)
    #[error("Client error (status {status}): {message}")]
    Client {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the error is worth retrying.
    ///
    /// The client never retries on its own; this only classifies the failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::RateLimit { .. } => true,
            Error::Server { .. } => true,
            Error::Auth { .. } => false,
            Error::Client { .. } => false,
            Error::Serialization(_) => false,
            Error::Configuration(_) => false,
            Error::Io { .. } => false,
            Error::Api(_) => false,
        }
    }

    /// Get the retry delay requested by the server, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Auth { request_id, .. }
            | Error::RateLimit { request_id, .. }
            | Error::Server { request_id, .. }
            | Error::Client { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Get the HTTP status code if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. }
            | Error::Server { status, .. }
            | Error::Client { status, .. } => Some(*status),
            Error::RateLimit { .. } => Some(429),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Map a non-success HTTP status and its body to an [`Error`]
pub(crate) fn map_status_error(
    status: u16,
    body: String,
    request_id: Option<String>,
    retry_after: Option<Duration>,
) -> Error {
    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body
    };

    match status {
        401 | 403 => Error::Auth {
            status,
            message,
            request_id,
        },
        429 => Error::RateLimit {
            retry_after,
            request_id,
        },
        400..=499 => Error::Client {
            status,
            message,
            request_id,
        },
        500..=599 => Error::Server {
            status,
            message,
            request_id,
        },
        _ => Error::Api(format!("Unexpected status {}: {}", status, message)),
    }
}

/// Parse a `Retry-After` header given in seconds
pub(crate) fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        for status in [401, 403] {
            let err = map_status_error(status, "nope".to_string(), None, None);
            assert!(matches!(err, Error::Auth { .. }), "{status} should map to Auth");
            assert_eq!(err.status(), Some(status));
            assert!(err.to_string().contains(&format!("status {status}")));
            assert!(!err.is_retryable());
        }
    }

    #[test]
    fn test_rate_limit_keeps_retry_after() {
        let err = map_status_error(
            429,
            String::new(),
            Some("req-1".to_string()),
            parse_retry_after("7"),
        );
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.status(), Some(429));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_and_server_ranges() {
        let client = map_status_error(422, "bad name".to_string(), None, None);
        assert!(matches!(client, Error::Client { status: 422, .. }));
        assert!(client.to_string().contains("bad name"));

        let server = map_status_error(503, String::new(), None, None);
        assert!(matches!(server, Error::Server { status: 503, .. }));
        assert!(server.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_unexpected_status() {
        let err = map_status_error(304, String::new(), None, None);
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after(" 12 "), Some(Duration::from_secs(12)));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
