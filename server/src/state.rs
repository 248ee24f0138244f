//! Shared application state for axum handlers.

use std::sync::Arc;

use pwa_bundle::IconSource;

use crate::config::AppConfig;

/// Read-only state shared by all requests.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
    /// Logo bytes, read once at startup. None disables the overlay.
    logo: Option<Vec<u8>>,
}

impl SharedState {
    /// Build state from loaded config.
    ///
    /// The logo asset is read eagerly so request handlers never touch the
    /// filesystem for it; an unreadable logo is logged and dropped.
    pub fn new(config: AppConfig) -> Self {
        let logo = config
            .logo_path
            .as_ref()
            .and_then(|path| match std::fs::read(path) {
                Ok(bytes) => {
                    tracing::info!(path = %path.display(), bytes = bytes.len(), "Logo loaded");
                    Some(bytes)
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Logo unreadable, QR codes will not carry it"
                    );
                    None
                }
            });

        Self {
            inner: Arc::new(SharedStateInner { config, logo }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn logo(&self) -> Option<&[u8]> {
        self.inner.logo.as_deref()
    }

    pub fn icon_source(&self) -> IconSource {
        match &self.inner.config.icon_path {
            Some(path) => IconSource::File(path.clone()),
            None => IconSource::Generated,
        }
    }
}
