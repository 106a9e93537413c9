//! # Kisan Core
//!
//! The domain layer of the Kisan Mitra marketplace.
//! This crate contains the post model, its validation rules and the storage
//! ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
