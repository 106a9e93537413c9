//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_JSON_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the marketplace data file.
    pub data_dir: PathBuf,
    pub posts_file: String,
    /// Upper bound for JSON request bodies; image data URIs are sent inline.
    pub max_json_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            posts_file: lookup("POSTS_FILE")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "marketplace-posts.json".to_string()),
            max_json_bytes: lookup("MAX_JSON_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_JSON_BYTES),
        }
    }

    /// Full path of the marketplace posts file.
    pub fn posts_path(&self) -> PathBuf {
        self.data_dir.join(&self.posts_file)
    }
}
