use thiserror::Error;

use crate::config::ConfigError;
use crate::services::ServiceError;

use super::EngineState;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Subsystem startup failed or left required services unregistered.
    #[error("startup failed")]
    Startup(#[source] anyhow::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot {op} while the engine is {state}")]
    InvalidState {
        op: &'static str,
        state: EngineState,
    },
}
