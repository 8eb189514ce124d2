use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    contact::DEFAULT_STATUS_RESET,
    observer::{RootMargin, RootMarginError},
    reveal::DEFAULT_REVEAL_THRESHOLD,
    submit::DEFAULT_SUBMIT_LATENCY,
};

pub const ENV_PREFIX: &str = "PORTFOLIO";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("reveal_threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f32),
    #[error("invalid section_root_margin: {0}")]
    InvalidRootMargin(#[from] RootMarginError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub reveal_threshold: f32,
    pub section_root_margin: String,
    pub submit_latency_ms: u64,
    pub status_reset_ms: u64,
    pub reveal_duration_ms: u64,
    pub content_path: Option<PathBuf>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            section_root_margin: RootMargin::detection_band().to_string(),
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY.as_millis() as u64,
            status_reset_ms: DEFAULT_STATUS_RESET.as_millis() as u64,
            reveal_duration_ms: 1000,
            content_path: None,
        }
    }
}

/// `<config dir>/portfolio/settings.toml`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join("settings.toml"))
}

impl PageSettings {
    /// Defaults, then `path` (required when given, otherwise the optional
    /// per-user file), then `PORTFOLIO__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Like [`PageSettings::load`], but reads environment overrides from `env`
    /// instead of the process environment when it is provided.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(default_path) = default_settings_path() {
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: PageSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges and returns the parsed section root margin.
    pub fn validate(&self) -> Result<RootMargin, SettingsError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SettingsError::InvalidThreshold(self.reveal_threshold));
        }
        Ok(self.section_root_margin.parse()?)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn status_reset(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }
}
