//! Time subsystem.
//!
//! Frame pacing is kept independent from any platform clock so it can be driven
//! by scripted timestamps in tests:
//! - `Clock` yields monotonic seconds
//! - `FrameTimer` decides, per host iteration, whether a logical frame runs
//! - `FrameTime` is the snapshot published to collaborators for that frame

mod clock;
mod frame_timer;

pub use clock::{Clock, MonotonicClock};
pub use frame_timer::{FrameTime, FrameTimer};
