pub mod error;
pub mod locator;
pub mod models;

pub use error::LocatorError;
#[cfg(test)]
pub use locator::signed_url_request;
pub use locator::ArtifactLocator;
#[cfg(test)]
pub use models::{ArtifactRecord, S3Artifact};
pub use models::{ArtifactsAction, BuildIdentity, SignedUrlRequest};
