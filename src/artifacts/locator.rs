use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::artifacts::error::LocatorError;
use crate::artifacts::models::{
    ArtifactRecord, ArtifactsAction, BuildIdentity, SignedUrlRequest, StorageDestination,
};
use crate::s3::{Profiles, Storage};

/// Find the record whose name equals `requested_path` minus one leading `/`.
///
/// Records are scanned in list order and the first exact match wins.
pub fn resolve<'a>(
    requested_path: &str,
    records: &'a [ArtifactRecord],
) -> Result<&'a ArtifactRecord, LocatorError> {
    let name = requested_path.strip_prefix('/').unwrap_or(requested_path);

    records
        .iter()
        .find(|record| record.name() == name)
        .ok_or_else(|| LocatorError::NotFound(name.to_string()))
}

/// Build the presign request for `record`, valid from `issued_at` for `expiry_seconds`.
///
/// With `force_attachment` the response is served as an attachment named after the
/// last segment of the object key, so the browser does not save it under the full path.
pub fn signed_url_request(
    record: &ArtifactRecord,
    build: &BuildIdentity,
    expiry_seconds: u64,
    force_attachment: bool,
    issued_at: DateTime<Utc>,
) -> SignedUrlRequest {
    let destination = StorageDestination::from_build(build, &record.artifact);
    let expires_at = i64::try_from(expiry_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|expiry| issued_at.checked_add_signed(expiry))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let content_disposition = force_attachment.then(|| {
        format!(
            "attachment; filename=\"{}\"",
            destination.file_name().trim()
        )
    });

    SignedUrlRequest {
        destination,
        issued_at,
        expires_at,
        content_disposition,
    }
}

/// Sign a download URL for `record` with `storage`, expiring `expiry_seconds` from now
pub async fn build_signed_url<S: Storage>(
    storage: &S,
    record: &ArtifactRecord,
    build: &BuildIdentity,
    expiry_seconds: u64,
    force_attachment: bool,
) -> Result<String, LocatorError> {
    let request = signed_url_request(record, build, expiry_seconds, force_attachment, Utc::now());

    debug!(
        "Presigning s3://{}/{} until {}",
        request.destination.bucket, request.destination.object_key, request.expires_at
    );

    let url = storage
        .presign_get(&record.artifact.region, &request)
        .await?;
    Ok(url)
}

/// Resolves requested artifact paths and issues presigned download URLs for them
pub struct ArtifactLocator<S: Storage> {
    profiles: Arc<Profiles<S>>,
}

impl<S: Storage> Clone for ArtifactLocator<S> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
        }
    }
}

impl<S: Storage> ArtifactLocator<S> {
    pub fn new(profiles: Profiles<S>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    /// Work out where a download request for `build` should be redirected.
    ///
    /// Returns `Ok(None)` when no path was requested. A bare `/` names no artifact
    /// and is not found.
    pub async fn download(
        &self,
        requested_path: Option<&str>,
        action: &ArtifactsAction,
        build: &BuildIdentity,
    ) -> Result<Option<String>, LocatorError> {
        let requested_path = match requested_path {
            Some(path) if !path.is_empty() => path,
            _ => return Ok(None),
        };

        let record = resolve(requested_path, &action.artifacts)?;

        let profile = self
            .profiles
            .get(&action.profile)
            .ok_or_else(|| LocatorError::UnknownProfile(action.profile.clone()))?;

        let url = build_signed_url(
            profile.storage(),
            record,
            build,
            profile.signed_url_expiry_seconds(),
            !record.show_directly_in_browser,
        )
        .await?;

        info!("Issued download URL for {} of {}", record.name(), build);
        Ok(Some(url))
    }
}
