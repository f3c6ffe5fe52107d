//! Engine configuration.
//!
//! Loaded from a TOML file; every field has a default so a partial (or
//! missing) file yields a usable configuration.

mod engine;

pub use engine::{ConfigError, EngineConfig, KeyBindings, TimingConfig, WindowConfig};
