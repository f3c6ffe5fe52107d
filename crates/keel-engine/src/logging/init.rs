use std::sync::Once;

use crate::config::EngineConfig;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "info",
/// "keel_engine=debug,wgpu=warn"). When unset, `RUST_LOG` applies, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl From<&EngineConfig> for LoggingConfig {
    fn from(config: &EngineConfig) -> Self {
        Self {
            env_filter: config.log_filter.clone(),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

/// Configured filter first, then the environment. Blank strings count as unset.
fn resolve_filter(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured
        .filter(|f| !f.trim().is_empty())
        .or_else(|| env.filter(|f| !f.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins_over_env() {
        let got = resolve_filter(Some("warn".into()), Some("trace".into()));
        assert_eq!(got.as_deref(), Some("warn"));
    }

    #[test]
    fn env_used_when_config_blank() {
        let got = resolve_filter(Some("  ".into()), Some("debug".into()));
        assert_eq!(got.as_deref(), Some("debug"));
        assert_eq!(resolve_filter(None, None), None);
    }

    #[test]
    fn from_engine_config_copies_filter() {
        let mut cfg = EngineConfig::default();
        cfg.log_filter = Some("keel_engine=debug".into());
        let lc = LoggingConfig::from(&cfg);
        assert_eq!(lc.env_filter.as_deref(), Some("keel_engine=debug"));
    }
}
