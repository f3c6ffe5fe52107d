use std::collections::HashSet;

use crate::services::{Service, ServiceKind};

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Input service.
///
/// Holds "is down" state across frames and the transitions of the current
/// frame. `begin_frame` drops the transitions; held state persists.
#[derive(Debug, Default)]
pub struct InputManager {
    modifiers: Modifiers,
    focused: bool,
    pointer_pos: Option<(f32, f32)>,

    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,

    frame: InputFrame,
}

impl Service for InputManager {
    const KIND: ServiceKind = ServiceKind::InputManager;
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame: clears per-frame transitions.
    pub fn begin_frame(&mut self) {
        self.frame.clear();
    }

    pub fn apply_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for ev in events {
            self.apply_event(ev);
        }
    }

    /// Folds one event into held state and the current frame.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are never delivered to an unfocused window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        // Auto-repeat re-sends Pressed for a held key; only the
                        // first one is a transition.
                        if self.keys_down.insert(*key) {
                            self.frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            self.frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            self.frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            self.frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { modifiers, .. } => self.modifiers = *modifiers,

            InputEvent::Text(t) => self.frame.text.push(t.clone()),
        }

        self.frame.events.push(ev);
    }

    /// Whether `key` is currently held.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether `key` transitioned into `state` during this frame.
    pub fn frame_key_action(&self, key: Key, state: KeyState) -> bool {
        match state {
            KeyState::Pressed => self.frame.keys_pressed.contains(&key),
            KeyState::Released => self.frame.keys_released.contains(&key),
        }
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn frame_button_action(&self, button: MouseButton, state: MouseButtonState) -> bool {
        match state {
            MouseButtonState::Pressed => self.frame.buttons_pressed.contains(&button),
            MouseButtonState::Released => self.frame.buttons_released.contains(&button),
        }
    }

    pub fn pointer_position(&self) -> Option<(f32, f32)> {
        self.pointer_pos
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn frame(&self) -> &InputFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextEvent;

    fn press(key: Key) -> InputEvent {
        InputEvent::key(key, KeyState::Pressed)
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::key(key, KeyState::Released)
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_is_held_and_a_frame_action() {
        let mut input = InputManager::new();
        input.apply_event(press(Key::P));

        assert!(input.is_key_down(Key::P));
        assert!(input.frame_key_action(Key::P, KeyState::Pressed));
        assert!(!input.frame_key_action(Key::P, KeyState::Released));
    }

    #[test]
    fn frame_actions_clear_but_held_state_persists() {
        let mut input = InputManager::new();
        input.apply_event(press(Key::Escape));
        input.begin_frame();

        assert!(input.is_key_down(Key::Escape));
        assert!(!input.frame_key_action(Key::Escape, KeyState::Pressed));
        assert!(input.frame().is_empty());
    }

    #[test]
    fn repeat_press_is_not_a_new_action() {
        let mut input = InputManager::new();
        input.apply_event(press(Key::F));
        input.begin_frame();
        input.apply_event(press(Key::F));

        assert!(!input.frame_key_action(Key::F, KeyState::Pressed));
        assert_eq!(input.frame().events.len(), 1);
    }

    #[test]
    fn release_records_transition() {
        let mut input = InputManager::new();
        input.apply_events([press(Key::Z), release(Key::Z)]);

        assert!(!input.is_key_down(Key::Z));
        assert!(input.frame_key_action(Key::Z, KeyState::Pressed));
        assert!(input.frame_key_action(Key::Z, KeyState::Released));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = InputManager::new();
        input.apply_event(release(Key::A));
        assert!(!input.frame_key_action(Key::A, KeyState::Released));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut input = InputManager::new();
        input.apply_events([InputEvent::Focused(true), press(Key::W)]);
        input.apply_event(InputEvent::Focused(false));

        assert!(!input.focused());
        assert!(!input.is_key_down(Key::W));
    }

    // ── pointer / text ────────────────────────────────────────────────────

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let mut input = InputManager::new();
        input.apply_event(InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(input.pointer_position(), Some((3.0, 4.0)));

        input.apply_event(InputEvent::PointerLeft);
        assert_eq!(input.pointer_position(), None);
    }

    #[test]
    fn button_press_updates_pointer_and_modifiers() {
        let mut input = InputManager::new();
        let mods = Modifiers { shift: true, ..Modifiers::default() };
        input.apply_event(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 10.0,
            y: 20.0,
            modifiers: mods,
        }));

        assert!(input.button_down(MouseButton::Left));
        assert!(input.frame_button_action(MouseButton::Left, MouseButtonState::Pressed));
        assert_eq!(input.pointer_position(), Some((10.0, 20.0)));
        assert!(input.modifiers().any());
    }

    #[test]
    fn text_is_a_per_frame_stream() {
        let mut input = InputManager::new();
        input.apply_event(InputEvent::Text(TextEvent { text: "hi".into() }));
        assert_eq!(input.frame().text.len(), 1);

        input.begin_frame();
        assert!(input.frame().text.is_empty());
    }
}
