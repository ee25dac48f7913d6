//! Create a dataset and print the server's response
//!
//! Run with: `DARWIN_API_KEY=... cargo run --example create_dataset -- my-dataset`

use darwin_client::DarwinClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "my-dataset".to_string());

    let client = DarwinClient::from_env()?;

    let dataset = client.create_dataset().name(name).call().await?;

    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
