//! GPU device + surface management for the engine window.
//!
//! Responsibilities:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) for one window
//! - clearing the acquired frame and presenting it

mod context;
mod error;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use init::GpuInit;
