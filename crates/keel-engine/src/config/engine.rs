use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Key;
use crate::window::ClearColor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub bindings: KeyBindings,

    /// Framebuffer clear color used at the start of every draw.
    pub clear_color: ClearColor,

    /// `env_logger` filter; `RUST_LOG` is consulted when unset.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound on logical frames per second.
    pub max_fps: u32,

    /// Seconds between frame-rate recomputations.
    pub print_period: f64,

    /// Sleep for the remaining frame budget on skipped iterations instead of
    /// spinning the host loop.
    pub idle_sleep: bool,
}

/// Keys recognized by the engine's update phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Toggles the whole scene between running and paused.
    pub pause: Key,
    /// Toggles actor updates (scene keeps drawing).
    pub freeze: Key,
    /// Asks the editor to show the scene fullscreen.
    pub fullscreen: Key,
    pub quit: Key,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            bindings: KeyBindings::default(),
            clear_color: ClearColor::new(0.5, 0.7, 0.7, 1.0),
            log_filter: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "keel".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_fps: 120,
            print_period: 3.0,
            idle_sleep: true,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pause: Key::P,
            freeze: Key::Z,
            fullscreen: Key::F,
            quit: Key::Escape,
        }
    }
}

impl EngineConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str, origin: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and validates the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        Self::from_toml_str(&s, &display)
    }

    /// Like `load`, but a missing file yields the defaults.
    ///
    /// Files that exist and fail to parse are still errors.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.max_fps == 0 {
            return Err(ConfigError::Invalid("timing.max_fps must be at least 1".into()));
        }
        if self.timing.print_period.is_nan() || self.timing.print_period <= 0.0 {
            return Err(ConfigError::Invalid(
                "timing.print_period must be a positive number of seconds".into(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }
}
