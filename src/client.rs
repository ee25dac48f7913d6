//! Main client for interacting with the Darwin API

use bon::bon;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{map_status_error, parse_retry_after, Error, Result};
use crate::security::ApiKey;

/// SDK version for User-Agent header
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Default Darwin host
pub const DEFAULT_BASE_URL: &str = "https://darwin.v7labs.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "DARWIN_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DARWIN_BASE_URL";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Main client for interacting with the Darwin API
///
/// Every call issues exactly one HTTP request. Failures are returned to the
/// caller as-is; nothing is retried.
#[derive(Debug, Clone)]
pub struct DarwinClient {
    api_key: ApiKey,
    base_url: Url,
    http: reqwest::Client,
}

#[bon]
impl DarwinClient {
    /// Create a new Darwin client with the given API key
    ///
    /// Timeouts are not set unless given explicitly.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: ApiKey,
        #[builder(into, default = String::from(DEFAULT_BASE_URL))] base_url: String,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
    ) -> Result<Self> {
        let base_url = parse_base_url(&base_url)?;

        let default_user_agent = format!("{}/{} (Rust)", SDK_NAME, SDK_VERSION);
        let mut client_builder = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or(default_user_agent))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90));

        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }
        if let Some(connect_timeout) = connect_timeout {
            client_builder = client_builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            api_key,
            base_url,
            http: client_builder.build()?,
        })
    }

    /// Create a new Darwin client from environment variables
    ///
    /// Reads from:
    /// - `DARWIN_API_KEY`: Required API key
    /// - `DARWIN_BASE_URL`: Optional base URL (defaults to <https://darwin.v7labs.com>)
    pub fn from_env() -> Result<Self> {
        use std::env;

        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            Error::Configuration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::builder().api_key(api_key).base_url(base_url).build()
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint against the base URL.
    ///
    /// Absolute URLs are used unchanged; relative paths are joined onto the
    /// base URL, keeping any path prefix it has.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url
                .join(endpoint.trim_start_matches('/'))
                .map_err(|e| {
                    Error::Configuration(format!("Invalid endpoint '{}': {}", endpoint, e))
                }),
            Err(e) => Err(Error::Configuration(format!(
                "Invalid endpoint '{}': {}",
                endpoint, e
            ))),
        }
    }

    /// POST a JSON body and decode the JSON response
    pub(crate) async fn post_json<T>(&self, url: Url, body: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        debug!(
            method = "POST",
            url = %url,
            bytes = payload.len(),
            "sending request"
        );

        let response = self
            .http
            .post(url.clone())
            .header(AUTHORIZATION, self.api_key.header_value())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after);
            // The body is only used for the error message
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = %url,
                status = status.as_u16(),
                request_id = request_id.as_deref().unwrap_or("-"),
                "request failed"
            );
            return Err(map_status_error(
                status.as_u16(),
                body,
                request_id,
                retry_after,
            ));
        }

        let text = response.text().await?;
        debug!(url = %url, status = status.as_u16(), "request succeeded");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::Configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "Invalid base URL '{}': cannot be used as a base",
            base_url
        )));
    }

    // Keep a trailing slash so joins append to the path instead of replacing it
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
