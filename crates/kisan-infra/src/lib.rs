//! # Kisan Infrastructure
//!
//! Concrete implementations of the ports defined in `kisan-core`.

pub mod storage;

pub use storage::JsonFilePostRepository;
