//! Integration tests for darwin-client against a live Darwin instance

use darwin_client::DarwinClient;
use std::io::Write;

/// Helper to create a client from environment variables
fn create_test_client() -> DarwinClient {
    dotenvy::dotenv().ok();
    DarwinClient::from_env().expect("Failed to create client from environment")
}

#[tokio::test]
#[ignore = "requires Darwin API key"]
async fn test_dataset_creation() {
    let client = create_test_client();

    let name = format!("integration-test-{}", std::process::id());
    let result = client.create_dataset().name(name.as_str()).call().await;

    assert!(result.is_ok(), "Failed to create dataset: {:?}", result.err());
    let dataset = result.unwrap();
    assert_eq!(dataset["name"], name.as_str());
}

#[tokio::test]
#[ignore = "requires Darwin API key and DARWIN_TEST_INFER_URL"]
async fn test_image_upload() {
    let client = create_test_client();
    let endpoint =
        std::env::var("DARWIN_TEST_INFER_URL").expect("DARWIN_TEST_INFER_URL not set");

    // 1x1 transparent GIF
    let gif: &[u8] = &[
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
        0x00, 0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00,
        0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x01, 0x44, 0x00, 0x3b,
    ];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(gif).unwrap();

    let result = client
        .upload_image()
        .endpoint(endpoint)
        .path(file.path())
        .call()
        .await;

    assert!(result.is_ok(), "Failed to upload image: {:?}", result.err());
}
