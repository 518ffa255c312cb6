use crate::artifacts::SignedUrlRequest;
use crate::s3::error::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage trait defining the interface for issuing presigned download URLs
/// against S3-compatible storage
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Presign a GET of the request's destination
    ///
    /// * `region` - The region the artifact's bucket lives in
    /// * `request` - Destination, validity window and response header overrides
    async fn presign_get(
        &self,
        region: &str,
        request: &SignedUrlRequest,
    ) -> Result<String, StorageError>;
}

/// Implementation of Storage trait for Arc<T> where T implements Storage
///
/// This allows sharing storage instances across request handlers.
#[async_trait]
impl<T: Storage + ?Sized> Storage for Arc<T> {
    async fn presign_get(
        &self,
        region: &str,
        request: &SignedUrlRequest,
    ) -> Result<String, StorageError> {
        (**self).presign_get(region, request).await
    }
}
