//! Application state - shared across all handlers.

use std::sync::Arc;

use kisan_core::ports::PostRepository;
use kisan_infra::JsonFilePostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the file-backed repository.
    pub fn new(config: &AppConfig) -> Self {
        let path = config.posts_path();
        tracing::info!(path = %path.display(), "Marketplace posts stored on disk");

        Self::with_repository(Arc::new(JsonFilePostRepository::new(path)))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
