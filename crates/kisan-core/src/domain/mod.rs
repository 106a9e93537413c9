//! Domain entities - the core business objects.

mod post;

pub use post::{MarketplacePost, PostDraft, PostInput, RawNumber, StoredPost};
