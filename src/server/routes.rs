use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::artifacts::{ArtifactLocator, ArtifactsAction, BuildIdentity};
use crate::builds::BuildStore;
use crate::s3::Storage;
use crate::server::error::ApiError;

/// Shared, read-only state behind every request
pub struct AppState<B: BuildStore, S: Storage> {
    build_store: Arc<B>,
    locator: ArtifactLocator<S>,
}

impl<B: BuildStore, S: Storage> Clone for AppState<B, S> {
    fn clone(&self) -> Self {
        Self {
            build_store: Arc::clone(&self.build_store),
            locator: self.locator.clone(),
        }
    }
}

impl<B: BuildStore, S: Storage> AppState<B, S> {
    pub fn new(build_store: B, locator: ArtifactLocator<S>) -> Self {
        Self {
            build_store: Arc::new(build_store),
            locator,
        }
    }

    async fn load_action(&self, build: &BuildIdentity) -> Result<ArtifactsAction, ApiError> {
        self.build_store
            .get_action(build)
            .await?
            .ok_or_else(|| ApiError::BuildNotFound(build.clone()))
    }
}

/// Routes for the `/job/{project}/{build}/s3/` namespace.
///
/// `{project}` is a single path segment, so a folder project such as `folder/my-app`
/// is addressed as `folder%2Fmy-app`.
pub fn router<B: BuildStore, S: Storage>(state: AppState<B, S>) -> Router {
    Router::new()
        .route("/job/{project}/{build}/s3/api/json", get(list_artifacts::<B, S>))
        .route("/job/{project}/{build}/s3/download", get(download_root::<B, S>))
        .route("/job/{project}/{build}/s3/download/", get(download_slash::<B, S>))
        .route(
            "/job/{project}/{build}/s3/download/{*path}",
            get(download::<B, S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET the artifacts recorded for a build
async fn list_artifacts<B: BuildStore, S: Storage>(
    State(state): State<AppState<B, S>>,
    Path((project, number)): Path<(String, u32)>,
) -> Result<Json<ArtifactsAction>, ApiError> {
    let build = BuildIdentity::new(project, number);
    let action = state.load_action(&build).await?;
    Ok(Json(action))
}

/// GET without an artifact path: nothing to redirect to
async fn download_root<B: BuildStore, S: Storage>(
    State(state): State<AppState<B, S>>,
    Path((project, number)): Path<(String, u32)>,
) -> Result<Response, ApiError> {
    redirect(&state, BuildIdentity::new(project, number), None).await
}

/// GET with only the trailing separator, which names no artifact
async fn download_slash<B: BuildStore, S: Storage>(
    State(state): State<AppState<B, S>>,
    Path((project, number)): Path<(String, u32)>,
) -> Result<Response, ApiError> {
    redirect(&state, BuildIdentity::new(project, number), Some("/")).await
}

/// GET an artifact: redirect to a freshly signed S3 URL
async fn download<B: BuildStore, S: Storage>(
    State(state): State<AppState<B, S>>,
    Path((project, number, path)): Path<(String, u32, String)>,
) -> Result<Response, ApiError> {
    let rest_of_path = format!("/{}", path);
    redirect(&state, BuildIdentity::new(project, number), Some(&rest_of_path)).await
}

async fn redirect<B: BuildStore, S: Storage>(
    state: &AppState<B, S>,
    build: BuildIdentity,
    rest_of_path: Option<&str>,
) -> Result<Response, ApiError> {
    let action = state.load_action(&build).await?;

    match state.locator.download(rest_of_path, &action, &build).await {
        Ok(Some(url)) => Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response()),
        Ok(None) => {
            debug!("No artifact path requested for {}", build);
            Ok(StatusCode::OK.into_response())
        }
        Err(e) => {
            warn!("Download of {:?} from {} failed: {}", rest_of_path, build, e);
            Err(e.into())
        }
    }
}
