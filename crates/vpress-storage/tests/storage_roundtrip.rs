//! Durable store integration tests.
//!
//! These talk to a real S3-compatible endpoint configured through the
//! STORAGE_* environment variables.

use vpress_storage::{ObjectVisibility, StoreClient};

/// Test store connectivity and bucket access.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_store_connectivity() {
    dotenvy::dotenv().ok();

    let client = StoreClient::from_env()
        .await
        .expect("Failed to create store client");

    client
        .check_connectivity()
        .await
        .expect("Failed to check store connectivity");
}

/// Test upload, existence probe and listing.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_upload_exists_list() {
    dotenvy::dotenv().ok();

    let client = StoreClient::from_env()
        .await
        .expect("Failed to create store client");

    let key = "uploads/integration-test.bin";

    client
        .upload_bytes(
            b"integration test content".to_vec(),
            key,
            "application/octet-stream",
            ObjectVisibility::Private,
        )
        .await
        .expect("Failed to upload bytes");

    assert!(client.exists(key).await.expect("exists probe failed"));

    let objects = client
        .list_objects("uploads/")
        .await
        .expect("Failed to list objects");
    assert!(objects.iter().any(|o| o.key == key));

    assert!(!client
        .exists("uploads/never-uploaded.bin")
        .await
        .expect("exists probe failed"));
}
