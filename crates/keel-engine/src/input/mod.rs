//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window layer translates platform events into `InputEvent`s; the
//! `InputManager` service folds them into held state plus per-frame
//! transitions that the update phase queries.

mod frame;
mod manager;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use manager::InputManager;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
