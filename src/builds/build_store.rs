use crate::artifacts::{ArtifactsAction, BuildIdentity};
use crate::builds::error::BuildStoreError;
use async_trait::async_trait;
use std::sync::Arc;

/// BuildStore trait defining where a build's published artifacts are looked up
#[async_trait]
pub trait BuildStore: Send + Sync + 'static {
    /// Load the artifacts action attached to `build`, if it has one
    async fn get_action(
        &self,
        build: &BuildIdentity,
    ) -> Result<Option<ArtifactsAction>, BuildStoreError>;
}

/// Implementation of BuildStore trait for Arc<T> where T implements BuildStore
#[async_trait]
impl<T: BuildStore + ?Sized> BuildStore for Arc<T> {
    async fn get_action(
        &self,
        build: &BuildIdentity,
    ) -> Result<Option<ArtifactsAction>, BuildStoreError> {
        (**self).get_action(build).await
    }
}
