use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "keep running" flag.
///
/// Clones observe the same flag, so a handle can be given to another thread
/// (or a signal handler) to stop the loop. The loop only looks at it between
/// iterations.
#[derive(Debug, Clone, Default)]
pub struct RunFlag {
    flag: Arc<AtomicBool>,
}

impl RunFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    pub fn set_running(&self, running: bool) {
        self.flag.store(running, Ordering::Release);
    }

    pub fn stop(&self) {
        self.set_running(false);
    }

    /// Clears the flag on Ctrl+C. Only one handler can exist per process.
    pub fn install_ctrlc(&self) -> anyhow::Result<()> {
        let flag = self.flag.clone();
        ctrlc::set_handler(move || {
            flag.store(false, Ordering::Release);
        })?;
        Ok(())
    }
}
