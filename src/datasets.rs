//! Dataset management

use bon::bon;
use serde::Serialize;
use serde_json::Value;

use crate::client::DarwinClient;
use crate::error::Result;

/// Path of the dataset collection, relative to the base URL
pub const DATASETS_PATH: &str = "api/datasets";

/// Body of a dataset creation request: `{"name": <name>}`
///
/// The name is sent as given; the server decides whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDatasetRequest {
    pub name: String,
}

impl CreateDatasetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[bon]
impl DarwinClient {
    /// Create a dataset
    ///
    /// Returns the decoded response body as sent by the server.
    #[builder]
    pub async fn create_dataset(&self, #[builder(into)] name: String) -> Result<Value> {
        let request = CreateDatasetRequest::new(name);
        let url = self.endpoint_url(DATASETS_PATH)?;

        tracing::info!(dataset = %request.name, "creating dataset");

        self.post_json(url, &request).await
    }
}
