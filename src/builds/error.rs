use thiserror::Error;

/// Errors that can occur when loading a build's artifact manifest
#[derive(Error, Debug)]
pub enum BuildStoreError {
    #[error("Invalid project name: {0}")]
    InvalidProject(String),

    #[error("Failed to read manifest: {0}")]
    Io(String),

    #[error("Malformed manifest {0}: {1}")]
    Manifest(String, String),
}
