use crate::artifacts::SignedUrlRequest;
use crate::s3::error::StorageError;
use crate::s3::storage::Storage;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A presign call as received by `FakeStorage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignCall {
    pub region: String,
    pub request: SignedUrlRequest,
}

/// `FakeStorage` is an in-memory implementation of the `Storage` trait for testing purposes.
/// It hands out deterministic URLs, remembers every request and can simulate signing failures.
#[derive(Clone, Default)]
pub struct FakeStorage {
    calls: Arc<Mutex<Vec<PresignCall>>>,
    fail_keys: Arc<Mutex<HashSet<String>>>,
}

impl FakeStorage {
    /// Create a new FakeStorage with no recorded calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Make presigning fail for a specific object key
    pub async fn fake_fail_key(&self, key: &str) {
        let mut fail_keys = self.fail_keys.lock().await;
        fail_keys.insert(key.to_string());
    }

    /// Every presign call received so far, oldest first
    pub async fn calls(&self) -> Vec<PresignCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Storage for FakeStorage {
    async fn presign_get(
        &self,
        region: &str,
        request: &SignedUrlRequest,
    ) -> Result<String, StorageError> {
        let destination = &request.destination;

        self.calls.lock().await.push(PresignCall {
            region: region.to_string(),
            request: request.clone(),
        });

        if self.fail_keys.lock().await.contains(&destination.object_key) {
            return Err(StorageError::Presign(
                destination.object_key.clone(),
                "simulated failure".to_string(),
            ));
        }

        let mut url = format!(
            "https://{}.s3.{}.fake/{}?X-Amz-Expires={}",
            destination.bucket,
            region,
            destination.object_key,
            request.expires_in_seconds()
        );
        if let Some(disposition) = &request.content_disposition {
            url.push_str("&response-content-disposition=");
            url.push_str(&urlencoding::encode(disposition));
        }

        Ok(url)
    }
}
