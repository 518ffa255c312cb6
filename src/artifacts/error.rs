use crate::s3::StorageError;
use thiserror::Error;

/// Errors that can occur when locating and signing an artifact
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Artifact {0} not found")]
    NotFound(String),

    #[error("S3 profile {0} is not configured")]
    UnknownProfile(String),

    #[error("Failed to sign download URL: {0}")]
    Storage(#[from] StorageError),
}
