//! Window service.
//!
//! The engine talks to its window through the `Window` trait: poll platform
//! input, clear the framebuffer, present. `WinitWindow` is the desktop
//! implementation; `HeadlessWindow` renders nothing and replays scripted input.

mod headless;
mod winit_window;

use serde::{Deserialize, Serialize};

use crate::input::InputEvent;
use crate::services::{Service, ServiceKind};

pub use headless::HeadlessWindow;
pub use winit_window::WinitWindow;

/// Presentation surface plus platform event source.
pub trait Window {
    /// Pumps platform events and returns the input they produced, in order.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// The user (or the platform) asked for the window to close.
    fn close_requested(&self) -> bool;

    fn set_closing(&mut self, closing: bool);

    fn set_title(&mut self, title: &str);

    /// Starts a frame by clearing the framebuffer.
    fn clear(&mut self, color: ClearColor);

    /// Presents the current frame.
    fn swap_buffers(&mut self);

    /// Drawable size in physical pixels.
    fn inner_size(&self) -> (u32, u32);
}

impl Service for Box<dyn Window> {
    const KIND: ServiceKind = ServiceKind::Window;
}

/// Straight-alpha RGBA clear color.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<ClearColor> for wgpu::Color {
    fn from(c: ClearColor) -> Self {
        wgpu::Color {
            r: f64::from(c.r),
            g: f64::from(c.g),
            b: f64::from(c.b),
            a: f64::from(c.a),
        }
    }
}
