use crate::artifacts::{ArtifactsAction, BuildIdentity};
use crate::builds::build_store::BuildStore;
use crate::builds::error::BuildStoreError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest inside each build directory
pub const MANIFEST_FILE: &str = "s3-artifacts.json";

/// Reads `{root}/{project}/{number}/s3-artifacts.json` manifests
#[derive(Debug, Clone)]
pub struct FileBuildStore {
    root: PathBuf,
}

impl FileBuildStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Manifest location for `build`. Project segments may not escape the root.
    pub fn manifest_path(&self, build: &BuildIdentity) -> Result<PathBuf, BuildStoreError> {
        let mut path = self.root.clone();
        for segment in build.project.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\')
            {
                return Err(BuildStoreError::InvalidProject(build.project.clone()));
            }
            path.push(segment);
        }
        path.push(build.number.to_string());
        path.push(MANIFEST_FILE);
        Ok(path)
    }
}

#[async_trait]
impl BuildStore for FileBuildStore {
    async fn get_action(
        &self,
        build: &BuildIdentity,
    ) -> Result<Option<ArtifactsAction>, BuildStoreError> {
        let path = self.manifest_path(build)?;

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No manifest for {} at {}", build, path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(BuildStoreError::Io(format!("{}: {}", path.display(), e)));
            }
        };

        let action: ArtifactsAction = serde_json::from_str(&text)
            .map_err(|e| BuildStoreError::Manifest(path.display().to_string(), e.to_string()))?;

        debug!(
            "Loaded {} artifact record(s) for {}",
            action.artifacts.len(),
            build
        );
        Ok(Some(action))
    }
}
