use async_trait::async_trait;

use crate::domain::{MarketplacePost, StoredPost};
use crate::error::RepoError;

/// Post repository - durable storage of the whole marketplace collection.
///
/// The collection is ordered newest first. Implementations hold no cache:
/// every `load` reflects the backing store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Load every stored post. An absent store yields an empty collection.
    async fn load(&self) -> Result<Vec<StoredPost>, RepoError>;

    /// Replace the stored collection with `posts`.
    async fn save(&self, posts: &[StoredPost]) -> Result<(), RepoError>;

    /// Insert `post` at the head of the collection and persist it.
    async fn prepend(&self, post: MarketplacePost) -> Result<MarketplacePost, RepoError>;
}
