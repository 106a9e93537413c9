//! JSON file post repository - the whole collection lives in one file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use kisan_core::domain::{MarketplacePost, StoredPost};
use kisan_core::error::RepoError;
use kisan_core::ports::PostRepository;

/// Post repository backed by a single pretty-printed JSON array.
///
/// Only a file that is not JSON, or whose top level is not an array, counts
/// as corrupt. Individual records are kept as stored.
///
/// Saves go through a sibling temp file and a rename, so readers only ever
/// see a complete collection. Every write path holds `write_lock` for the
/// full load-modify-save sequence; concurrent creations within one process
/// never overwrite each other. Readers do not take the lock.
pub struct JsonFilePostRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_posts(&self) -> Result<Vec<StoredPost>, RepoError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Post file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RepoError::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let corrupt = |detail: String| {
            tracing::warn!(path = %self.path.display(), error = %detail, "Post file is corrupt");
            RepoError::Corruption(format!("{}: {}", self.path.display(), detail))
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(records)) => Ok(records.into_iter().map(StoredPost::from).collect()),
            Ok(_) => Err(corrupt("top-level value is not an array".to_string())),
            Err(e) => Err(corrupt(e.to_string())),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("posts");
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()))
    }

    /// Caller must hold `write_lock`.
    async fn write_posts(&self, posts: &[StoredPost]) -> Result<(), RepoError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                RepoError::Persistence(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let bytes =
            serde_json::to_vec_pretty(posts).map_err(|e| RepoError::Persistence(e.to_string()))?;

        let temp = self.temp_path();
        let written = async {
            let mut file = fs::File::create(&temp).await?;
            file.write_all(&bytes).await?;
            file.sync_all().await?;
            fs::rename(&temp, &self.path).await
        }
        .await;

        if let Err(e) = written {
            // Best effort; the target file is untouched either way.
            let _ = fs::remove_file(&temp).await;
            return Err(RepoError::Persistence(format!(
                "{}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Saved posts");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn load(&self) -> Result<Vec<StoredPost>, RepoError> {
        self.read_posts().await
    }

    async fn save(&self, posts: &[StoredPost]) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;
        self.write_posts(posts).await
    }

    async fn prepend(&self, post: MarketplacePost) -> Result<MarketplacePost, RepoError> {
        let record =
            StoredPost::try_from(&post).map_err(|e| RepoError::Persistence(e.to_string()))?;

        let _guard = self.write_lock.lock().await;

        let mut posts = self.read_posts().await?;
        posts.insert(0, record);
        self.write_posts(&posts).await?;

        tracing::debug!(post_id = %post.id, total = posts.len(), "Prepended post");
        Ok(post)
    }
}
