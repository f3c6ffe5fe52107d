//! keel studio: the engine with a status-line editor and two demo scenes.
//!
//! Usage: `keel-studio [config.toml] [--headless]`. The config path defaults to
//! `keel.toml`; a missing file means defaults.

mod demo;
mod subsystems;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use keel_engine::logging::{init_logging, LoggingConfig};
use keel_engine::{Engine, EngineConfig};

use crate::subsystems::StudioSubsystems;

const DEFAULT_CONFIG: &str = "keel.toml";

struct Args {
    config: PathBuf,
    headless: bool,
}

fn parse_args() -> Args {
    let mut config = None;
    let mut headless = false;

    for arg in std::env::args().skip(1) {
        if arg == "--headless" {
            headless = true;
        } else if config.is_none() {
            config = Some(PathBuf::from(arg));
        }
    }

    Args {
        config: config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG)),
        headless,
    }
}

fn main() -> ExitCode {
    let args = parse_args();

    let config = match EngineConfig::load_or_default(&args.config) {
        Ok(c) => c,
        Err(e) => {
            init_logging(LoggingConfig::default());
            log::error!("{e}");
            eprintln!("keel-studio: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(LoggingConfig::from(&config));
    log::info!(
        "configuration: {}{}",
        args.config.display(),
        if args.config.exists() { "" } else { " (defaults)" }
    );

    match run(config, args.headless) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("keel-studio: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: EngineConfig, headless: bool) -> anyhow::Result<()> {
    let mut engine = Engine::new(config, StudioSubsystems::new(headless))
        .context("invalid engine configuration")?;
    engine.run()?;
    Ok(())
}
