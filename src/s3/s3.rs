use crate::artifacts::SignedUrlRequest;
use crate::config::{ProfileConfig, MAX_SIGNED_URL_EXPIRY_SECONDS};
use crate::s3::error::StorageError;
use crate::s3::storage::Storage;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{config::Region, Client};
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// Real S3 implementation of the Storage trait
#[derive(Clone)]
pub struct S3Storage {
    profile: String,
    config: aws_sdk_s3::Config,
}

impl S3Storage {
    /// Create a new S3Storage instance from a profile's configuration
    pub async fn new(profile: &ProfileConfig) -> Result<Self, StorageError> {
        info!(
            "Creating S3Storage for profile {}: endpoint={:?}, region={}, access_key={:?}",
            profile.name, profile.endpoint, profile.region, profile.access_key_id
        );

        let config_loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(profile.region.clone()));

        // Static keys take precedence over the default credential chain
        let aws_config = match (&profile.access_key_id, &profile.secret_access_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(
                    access_key,
                    secret_key,
                    None,
                    None,
                    "StaticCredentialsProvider",
                );
                config_loader.credentials_provider(credentials).load().await
            }
            (None, None) => config_loader.load().await,
            _ => {
                return Err(StorageError::Configuration(format!(
                    "Profile {} must set both access_key_id and secret_access_key, or neither",
                    profile.name
                )))
            }
        };

        let mut client_builder = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(profile.force_path_style);
        if let Some(endpoint) = &profile.endpoint {
            info!("Setting custom endpoint: {}", endpoint);
            client_builder = client_builder.endpoint_url(endpoint);
        }

        Ok(Self {
            profile: profile.name.clone(),
            config: client_builder.build(),
        })
    }

    /// Client bound to `region`, falling back to the profile's region when empty
    fn client_for(&self, region: &str) -> Client {
        if region.is_empty() {
            return Client::from_conf(self.config.clone());
        }

        let config = self
            .config
            .to_builder()
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(config)
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn presign_get(
        &self,
        region: &str,
        request: &SignedUrlRequest,
    ) -> Result<String, StorageError> {
        let key = &request.destination.object_key;
        let expires_in = request.expires_in_seconds();
        if expires_in == 0 || expires_in > MAX_SIGNED_URL_EXPIRY_SECONDS {
            return Err(StorageError::InvalidExpiry(expires_in));
        }

        let presigning = PresigningConfig::builder()
            .start_time(SystemTime::from(request.issued_at))
            .expires_in(Duration::from_secs(expires_in))
            .build()
            .map_err(|e| StorageError::Presign(key.clone(), e.to_string()))?;

        debug!(
            "Presigning s3://{}/{} in region {} with profile {}",
            request.destination.bucket, key, region, self.profile
        );

        let mut get_object = self
            .client_for(region)
            .get_object()
            .bucket(&request.destination.bucket)
            .key(key);
        if let Some(disposition) = &request.content_disposition {
            get_object = get_object.response_content_disposition(disposition);
        }

        let presigned = get_object
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(key.clone(), e.to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
