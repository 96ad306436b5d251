//! Configuration service.
//!
//! Loads `config.toml` from the config directory and caches it. A missing
//! file is created with the defaults on first access so users have something
//! to edit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use haven_core::HavenError;
use haven_core::config::AppConfig;
use haven_core::error::Result;

use crate::paths::{HavenPaths, ServiceType};
use crate::storage::AtomicFile;

#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicFile,
    /// Cached configuration, loaded lazily on first access.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::Config)
            .map_err(|e| HavenError::config(e.to_string()))?;
        Ok(Self::with_path(path.into_path_buf()))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.file.path()
    }

    /// Returns the configuration, loading it if not cached.
    ///
    /// An unreadable file is logged and the defaults are used for this run.
    pub async fn get_config(&self) -> AppConfig {
        if let Some(cached) = self.config.read().await.as_ref() {
            return cached.clone();
        }

        let loaded = match self.load_config().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load {}, using defaults: {}",
                    self.file.path().display(),
                    e
                );
                AppConfig::default()
            }
        };

        *self.config.write().await = Some(loaded.clone());
        loaded
    }

    /// Writes the configuration and refreshes the cache.
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        self.file.write(&content).await?;
        *self.config.write().await = Some(config.clone());
        tracing::info!("saved configuration to {}", self.file.path().display());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub async fn invalidate_cache(&self) {
        *self.config.write().await = None;
    }

    async fn load_config(&self) -> Result<AppConfig> {
        match self.file.read().await? {
            Some(content) => Ok(toml::from_str(&content)?),
            None => {
                let config = AppConfig::default();
                self.file.write(&toml::to_string_pretty(&config)?).await?;
                tracing::info!("created default config at {}", self.file.path().display());
                Ok(config)
            }
        }
    }
}
