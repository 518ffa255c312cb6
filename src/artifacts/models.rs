use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An object uploaded to S3 as part of a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Artifact {
    pub bucket: String,
    /// Relative path of the artifact as uploaded, e.g. `out/app.jar`
    pub name: String,
    pub region: String,
    /// Key objects under the full project name (`folder/project`) instead of
    /// only its last segment
    #[serde(default = "default_use_full_project_name")]
    pub use_full_project_name: bool,
}

fn default_use_full_project_name() -> bool {
    true
}

/// Record of an artifact attached to a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub artifact: S3Artifact,
    /// When false, downloads are forced to "Save As" via content-disposition
    #[serde(default)]
    pub show_directly_in_browser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5sum: Option<String>,
    #[serde(default)]
    pub keep_forever: bool,
}

impl ArtifactRecord {
    pub fn name(&self) -> &str {
        &self.artifact.name
    }
}

/// The artifacts published by one build, and the profile they were uploaded with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactsAction {
    pub profile: String,
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
}

/// Identifies one build of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentity {
    /// Full project name, folders separated by `/`
    pub project: String,
    pub number: u32,
}

impl BuildIdentity {
    pub fn new(project: impl Into<String>, number: u32) -> Self {
        Self {
            project: project.into(),
            number,
        }
    }

    /// Last segment of the full project name
    pub fn short_name(&self) -> &str {
        self.project.rsplit('/').next().unwrap_or(&self.project)
    }
}

impl fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.project, self.number)
    }
}

/// Bucket and key an artifact is stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDestination {
    pub bucket: String,
    pub object_key: String,
}

impl StorageDestination {
    /// Objects are keyed `jobs/{project}/{build number}/{artifact name}`
    pub fn from_build(build: &BuildIdentity, artifact: &S3Artifact) -> Self {
        let project = if artifact.use_full_project_name {
            build.project.as_str()
        } else {
            build.short_name()
        };

        Self {
            bucket: artifact.bucket.clone(),
            object_key: format!("jobs/{}/{}/{}", project, build.number, artifact.name),
        }
    }

    /// Final `/`-separated segment of the object key
    pub fn file_name(&self) -> &str {
        self.object_key
            .rsplit('/')
            .next()
            .unwrap_or(&self.object_key)
    }
}

/// Everything needed to presign one GET of an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrlRequest {
    pub destination: StorageDestination,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Value for the `response-content-disposition` override
    pub content_disposition: Option<String>,
}

impl SignedUrlRequest {
    /// Seconds between issue and expiry, clamped at zero
    pub fn expires_in_seconds(&self) -> u64 {
        (self.expires_at - self.issued_at)
            .num_seconds()
            .try_into()
            .unwrap_or(0)
    }
}
