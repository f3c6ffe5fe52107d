//! Keel engine crate.
//!
//! A service registry plus a frame-paced application loop. Platform pieces
//! (winit window, wgpu surface) live behind the `Window` service so the loop
//! itself runs headless in tests.

pub mod config;
pub mod device;
pub mod editor;
pub mod engine;
pub mod entity;
pub mod events;
pub mod input;
pub mod logging;
pub mod resources;
pub mod scene;
pub mod services;
pub mod time;
pub mod window;

pub use config::EngineConfig;
pub use engine::{Engine, EngineError, EngineResult, Subsystems};
pub use services::{Service, ServiceKind, ServiceRegistry};
