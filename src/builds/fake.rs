use crate::artifacts::{ArtifactsAction, BuildIdentity};
use crate::builds::build_store::BuildStore;
use crate::builds::error::BuildStoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A fake in-memory implementation of the BuildStore trait for testing
#[derive(Clone, Default)]
pub struct FakeBuildStore {
    actions: Arc<Mutex<HashMap<BuildIdentity, ArtifactsAction>>>,
}

impl FakeBuildStore {
    /// Create a new empty FakeBuildStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an artifacts action to a build
    pub async fn fake_add_action(&self, build: BuildIdentity, action: ArtifactsAction) {
        let mut actions = self.actions.lock().await;
        actions.insert(build, action);
    }
}

#[async_trait]
impl BuildStore for FakeBuildStore {
    async fn get_action(
        &self,
        build: &BuildIdentity,
    ) -> Result<Option<ArtifactsAction>, BuildStoreError> {
        let actions = self.actions.lock().await;
        Ok(actions.get(build).cloned())
    }
}
