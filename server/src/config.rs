//! Environment-driven configuration, read once at startup.

use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// Logo stamped at the center of generated QR codes, when present.
    pub logo_path: Option<PathBuf>,
    /// Pre-built 192x192 bundle icon; a placeholder is generated when unset.
    pub icon_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the environment (after `dotenvy` has populated it).
    pub fn from_env() -> Self {
        let server_port = std::env::var("QR_BADGE_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self {
            server_port,
            logo_path: std::env::var("QR_BADGE_LOGO").ok().map(PathBuf::from),
            icon_path: std::env::var("QR_BADGE_ICON").ok().map(PathBuf::from),
        }
    }
}
