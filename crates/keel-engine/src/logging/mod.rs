//! Logging setup.
//!
//! Everything logs through the `log` facade; the binary calls `init_logging`
//! once, early in `main`, to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
