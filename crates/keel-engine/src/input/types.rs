use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyboard key identifier.
///
/// Platform keycodes map onto these variants where possible; anything else is
/// carried as `Key::Unknown` with the platform's code. Keys deserialize from
/// their variant name so bindings can live in the config file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Key with no variant here, carrying the platform's key code.
    Unknown(u32),
}

impl Key {
    /// `Digit1`..`Digit9` as `0..=8`; the editor uses these to pick scenes.
    pub fn digit_index(self) -> Option<usize> {
        let idx = match self {
            Key::Digit1 => 0,
            Key::Digit2 => 1,
            Key::Digit3 => 2,
            Key::Digit4 => 3,
            Key::Digit5 => 4,
            Key::Digit6 => 5,
            Key::Digit7 => 6,
            Key::Digit8 => 7,
            Key::Digit9 => 8,
            _ => return None,
        };
        Some(idx)
    }
}

/// Direction of a key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side button, usually mapped to "back".
    Back,
    /// Side button, usually mapped to "forward".
    Forward,
    /// Any further button, by platform index.
    Other(u16),
}

/// Direction of a mouse button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys held when an event was produced.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    /// At least one modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// `Line` is coarse wheel notches; `Pixel` is touchpad-precision scrolling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer position in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Mouse button transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    /// Pointer position at the time of the click, in logical pixels.
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Committed text (IME commit or plain typing).
#[derive(Debug, Clone, PartialEq)]
pub struct TextEvent {
    pub text: String,
}

/// Platform-agnostic input event.
///
/// Window backends translate their native events into these; the engine and
/// its services never see platform types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The set of held modifiers changed.
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Platform scancode when available.
        code: u32,
        /// Auto-repeat while the key is held.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Wheel or touchpad scroll.
    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    Text(TextEvent),

    /// The pointer left the window.
    PointerLeft,

    /// The window gained (`true`) or lost focus.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a non-repeat key event without modifiers.
    pub fn key(key: Key, state: KeyState) -> Self {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
