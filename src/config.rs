use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Longest expiry S3 accepts for a SigV4 presigned URL (7 days)
pub const MAX_SIGNED_URL_EXPIRY_SECONDS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub builds: BuildsConfig,
    pub profiles: Vec<ProfileConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildsConfig {
    /// Directory holding `{project}/{number}/s3-artifacts.json` manifests
    pub root: PathBuf,
}

/// A named set of S3 credentials and signing settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
    #[serde(default = "default_signed_url_expiry_seconds")]
    pub signed_url_expiry_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub path: String,
    /// Maximum size of a single log file in MiB
    pub size: u64,
    pub max_files: usize,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_signed_url_expiry_seconds() -> u64 {
    60
}

impl Config {
    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.profiles.is_empty() {
            bail!("At least one [[profiles]] entry is required");
        }

        let mut names = HashSet::new();
        for profile in &self.profiles {
            if !names.insert(profile.name.as_str()) {
                bail!("Duplicate profile name: {}", profile.name);
            }
            if profile.signed_url_expiry_seconds == 0
                || profile.signed_url_expiry_seconds > MAX_SIGNED_URL_EXPIRY_SECONDS
            {
                bail!(
                    "Profile {}: signed_url_expiry_seconds must be between 1 and {}, got {}",
                    profile.name,
                    MAX_SIGNED_URL_EXPIRY_SECONDS,
                    profile.signed_url_expiry_seconds
                );
            }
        }

        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<Config> {
    let config_text = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read configuration file {}", path))?;
    let config: Config = toml::from_str(&config_text)
        .with_context(|| format!("Failed to parse configuration file {}", path))?;
    config.validate()?;
    Ok(config)
}
