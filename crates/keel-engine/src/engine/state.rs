use std::fmt;

/// Engine lifecycle. Transitions only move forward.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Running,
    /// The run flag cleared; teardown has not happened yet.
    ShuttingDown,
    Terminated,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Running => "running",
            EngineState::ShuttingDown => "shutting down",
            EngineState::Terminated => "terminated",
        };
        f.write_str(s)
    }
}
