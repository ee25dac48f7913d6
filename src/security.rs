//! Handling of the API key credential
//!
//! The key is kept in an [`ApiKey`] wrapper so it cannot end up in logs or
//! error messages through `Debug` or `Display`.

use serde::Serialize;
use std::fmt;

/// Prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "ApiKey";

/// An API key, automatically redacted in Debug/Display
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new ApiKey
    pub fn new(value: impl Into<String>) -> Self {
        ApiKey(value.into())
    }

    /// Get the actual value (use with caution)
    ///
    /// # Security Warning
    /// Only use this method when you need to actually send the key.
    /// Never log or display the result of this method.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header: `ApiKey <key>`
    pub fn header_value(&self) -> String {
        format!("{} {}", AUTH_SCHEME, self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***REDACTED***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        ApiKey::new(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        ApiKey::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_redaction() {
        let key = ApiKey::new("Xk2fLq.9sd8f7g6h5j4k3l2");

        let debug_str = format!("{:?}", key);
        assert_eq!(debug_str, "ApiKey(***REDACTED***)");

        let display_str = format!("{}", key);
        assert_eq!(display_str, "***REDACTED***");

        assert_eq!(key.expose_secret(), "Xk2fLq.9sd8f7g6h5j4k3l2");
    }

    #[test]
    fn test_header_value() {
        let key = ApiKey::from("abc.def");
        assert_eq!(key.header_value(), "ApiKey abc.def");
    }

    #[test]
    fn test_header_value_is_verbatim() {
        assert_eq!(ApiKey::from(" k ").header_value(), "ApiKey  k ");
        assert_eq!(ApiKey::from("").header_value(), "ApiKey ");
    }

    #[test]
    fn test_serializes_transparently() {
        let key = ApiKey::from("k-1");
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""k-1""#);
    }
}
