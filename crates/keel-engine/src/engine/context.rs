use crate::config::{EngineConfig, KeyBindings};
use crate::services::ServiceRegistry;
use crate::time::FrameTime;
use crate::window::ClearColor;

use super::RunFlag;

/// Everything the phases share.
pub struct EngineContext {
    pub registry: ServiceRegistry,
    /// Timing of the most recently executed frame.
    pub frame: FrameTime,
    pub run_flag: RunFlag,
    pub bindings: KeyBindings,
    pub clear_color: ClearColor,
}

impl EngineContext {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            registry: ServiceRegistry::new(),
            frame: FrameTime::default(),
            run_flag: RunFlag::new(),
            bindings: config.bindings.clone(),
            clear_color: config.clear_color,
        }
    }
}
