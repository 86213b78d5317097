//! Application configuration loaded from environment variables.
//!
//! Everything has a local-development default, so a bare `from_env()`
//! works out of the box.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON snapshot holding every account's data
    pub data_file: PathBuf,
    /// Collector endpoint receiving one record per logged set
    pub tracker_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/curmove.json"),
            tracker_url: "http://127.0.0.1:5000/guardar_registro".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CURMOVE_DATA_FILE` overrides the snapshot location and
    /// `CURMOVE_TRACKER_URL` the collector endpoint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_file: env::var("CURMOVE_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/curmove.json")),
            tracker_url: env::var("CURMOVE_TRACKER_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| "http://127.0.0.1:5000/guardar_registro".to_string()),
        }
    }
}
