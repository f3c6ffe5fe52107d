use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, TextEvent};

/// Input transitions recorded since the last `InputManager::begin_frame`.
///
/// Held state lives in `InputManager`; this only answers "what changed during
/// this frame".
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame. Key repeats are not included.
    pub keys_pressed: HashSet<Key>,

    /// Keys that went up this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons that went down this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons that went up this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Committed text, in arrival order.
    pub text: Vec<TextEvent>,
}

impl InputFrame {
    /// Forgets everything recorded; called at the start of each frame.
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.text.clear();
    }

    /// No event arrived this frame.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
