use thiserror::Error;

/// Errors that can occur when presigning against S3 storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to presign object {0}: {1}")]
    Presign(String, String),

    #[error("Expiry of {0} seconds is outside the range S3 can sign")]
    InvalidExpiry(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
