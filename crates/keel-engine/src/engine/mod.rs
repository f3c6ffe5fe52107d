//! Application loop.
//!
//! `Engine` owns the service registry and drives one frame per elapsed frame
//! budget through four phases: new frame, input, update, draw. Services are
//! supplied by a `Subsystems` implementation at startup and handed back to it
//! at teardown.

mod context;
mod error;
mod runner;
mod signals;
mod state;
mod subsystems;

pub use context::EngineContext;
pub use error::{EngineError, EngineResult};
pub use runner::Engine;
pub use signals::RunFlag;
pub use state::EngineState;
pub use subsystems::Subsystems;
