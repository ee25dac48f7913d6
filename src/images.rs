//! Image upload
//!
//! Images are sent inline as JSON: the file bytes are base64 encoded
//! (standard alphabet, padded) and wrapped as `{"image": {"base64": ...}}`.
//! Endpoints that accept a remote image take `{"image": {"url": ...}}` instead.

use base64::prelude::*;
use bon::bon;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::client::DarwinClient;
use crate::error::{Error, Result};

/// Where the server should take the image from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Inline image content, base64 encoded
    Base64(String),
    /// Publicly reachable image URL
    Url(String),
}

impl ImageSource {
    /// Encode raw image bytes
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        ImageSource::Base64(BASE64_STANDARD.encode(bytes))
    }

    /// Read a whole file and encode its bytes.
    ///
    /// The file is closed before this returns.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read image file");
        Ok(Self::from_bytes(bytes))
    }

    /// Reference a remote image
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }
}

/// Body of an image request: `{"image": <source>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePayload {
    pub image: ImageSource,
}

impl ImagePayload {
    pub fn new(image: ImageSource) -> Self {
        Self { image }
    }
}

#[bon]
impl DarwinClient {
    /// Upload a local image file to `endpoint`
    ///
    /// `endpoint` may be an absolute URL or a path relative to the base URL.
    /// A file that cannot be read fails before any request is sent.
    #[builder]
    pub async fn upload_image(
        &self,
        #[builder(into)] endpoint: String,
        #[builder(into)] path: PathBuf,
    ) -> Result<Value> {
        let image = ImageSource::from_path(&path).await?;
        self.send_image(&endpoint, image).await
    }

    /// Send an already prepared image to `endpoint`
    pub async fn send_image(&self, endpoint: &str, image: ImageSource) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        self.post_json(url, &ImagePayload::new(image)).await
    }
}
