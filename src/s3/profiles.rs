use std::collections::HashMap;
use tracing::info;

use crate::config::ProfileConfig;
use crate::s3::error::StorageError;
use crate::s3::s3::S3Storage;
use crate::s3::storage::Storage;

/// A named storage together with how long its signed URLs stay valid
pub struct Profile<S: Storage> {
    storage: S,
    signed_url_expiry_seconds: u64,
}

impl<S: Storage> Profile<S> {
    pub fn new(storage: S, signed_url_expiry_seconds: u64) -> Self {
        Self {
            storage,
            signed_url_expiry_seconds,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn signed_url_expiry_seconds(&self) -> u64 {
        self.signed_url_expiry_seconds
    }
}

/// Profiles keyed by name, as referenced from a build's artifacts manifest
pub struct Profiles<S: Storage> {
    profiles: HashMap<String, Profile<S>>,
}

impl<S: Storage> Default for Profiles<S> {
    fn default() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }
}

impl<S: Storage> Profiles<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile, replacing any previous one with the same name
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile<S>) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn with_profile(mut self, name: impl Into<String>, profile: Profile<S>) -> Self {
        self.insert(name, profile);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Profile<S>> {
        self.profiles.get(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

impl Profiles<S3Storage> {
    /// Build an S3 client configuration for every configured profile
    pub async fn from_config(configs: &[ProfileConfig]) -> Result<Self, StorageError> {
        let mut profiles = Self::new();
        for config in configs {
            let storage = S3Storage::new(config).await?;
            profiles.insert(
                config.name.clone(),
                Profile::new(storage, config.signed_url_expiry_seconds),
            );
        }

        info!("Loaded {} S3 profile(s)", profiles.len());
        Ok(profiles)
    }
}
