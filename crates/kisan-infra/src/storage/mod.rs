//! Post storage backends.

mod json_file;

pub use json_file::JsonFilePostRepository;
