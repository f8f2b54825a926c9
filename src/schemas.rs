use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory the frontend bundle is served from
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(static_dir: PathBuf) -> Self {
        Self { static_dir }
    }

    pub fn has_frontend(&self) -> bool {
        self.static_dir.join("index.html").is_file()
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Whether the frontend bundle is present
    pub frontend: String,
}
