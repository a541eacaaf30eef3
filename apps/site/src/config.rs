use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON profile record. `None` serves the built-in profile.
    pub profile_path: Option<PathBuf>,
    /// Directory served for `/cv.pdf`, `/me.jpg` and the stylesheet.
    pub assets_dir: PathBuf,
    /// When set, the page is written to `<export_path>/index.html` and the process exits.
    pub export_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_path: optional_path("PROFILE_PATH"),
            assets_dir: optional_path("ASSETS_DIR").unwrap_or_else(|| PathBuf::from("public")),
            export_path: optional_path("EXPORT_PATH"),
        })
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
