use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::artifacts::{BuildIdentity, LocatorError};
use crate::builds::BuildStoreError;

/// Body sent when the requested artifact is not part of the build
pub const ARTIFACT_NOT_AVAILABLE: &str = "This artifact is not available";

/// Body sent when the build has no artifacts manifest
pub const BUILD_NOT_FOUND: &str = "Build not found";

/// Failures of an HTTP request, mapped onto plain-text responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Build {0} not found")]
    BuildNotFound(BuildIdentity),

    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    BuildStore(#[from] BuildStoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BuildNotFound(_) => (StatusCode::NOT_FOUND, BUILD_NOT_FOUND).into_response(),
            ApiError::Locator(LocatorError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, ARTIFACT_NOT_AVAILABLE).into_response()
            }
            ApiError::BuildStore(BuildStoreError::InvalidProject(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Locator(_) | ApiError::BuildStore(_) => {
                error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
