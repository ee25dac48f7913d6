//! Upload a local image as base64 and print the server's response
//!
//! Run with:
//! `DARWIN_API_KEY=... cargo run --example upload_image -- image.jpg https://darwin.v7labs.com/ai/models/<model-id>/infer`

use anyhow::Context;
use darwin_client::DarwinClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: upload_image <image-path> <endpoint>")?;
    let endpoint = args.next().context("usage: upload_image <image-path> <endpoint>")?;

    let client = DarwinClient::from_env()?;

    let result = client
        .upload_image()
        .endpoint(endpoint)
        .path(path)
        .call()
        .await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
