//! Ergonomic Rust client for the Darwin REST API
//!
//! Requests are authenticated with an API key, sent as
//! `Authorization: ApiKey <key>`. Each operation issues a single HTTP POST
//! with a JSON body and returns the decoded JSON response. Nothing is retried.
//!
//! ```no_run
//! use darwin_client::DarwinClient;
//!
//! # async fn example() -> darwin_client::Result<()> {
//! let client = DarwinClient::from_env()?;
//!
//! let dataset = client.create_dataset().name("my-dataset").call().await?;
//! println!("{dataset}");
//!
//! let result = client
//!     .upload_image()
//!     .endpoint("https://darwin.v7labs.com/ai/models/<model-id>/infer")
//!     .path("image.jpg")
//!     .call()
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod datasets;
pub mod error;
pub mod images;
pub mod security;

pub use client::DarwinClient;
pub use datasets::CreateDatasetRequest;
pub use error::{Error, Result};
pub use images::{ImagePayload, ImageSource};
pub use security::ApiKey;
