//! Editor hooks.
//!
//! An editor runs alongside the current scene every frame. It sees input and
//! may switch scenes during update, receives engine events, and draws with a
//! read-only view of the engine. The editor service is optional.

mod overlay;

use crate::events::{EngineEvent, EventManager};
use crate::input::InputManager;
use crate::resources::ResourceManager;
use crate::scene::{SceneId, SceneManager};
use crate::services::{Service, ServiceKind};
use crate::time::FrameTime;
use crate::window::Window;

pub use overlay::StatusOverlay;

pub trait Editor {
    fn new_frame(&mut self) {}

    fn update(&mut self, input: &mut EditorInput<'_>);

    fn on_event(&mut self, _event: &EngineEvent) {}

    fn draw(&mut self, view: &EditorView<'_>, window: &mut dyn Window);

    /// Flips whether the current scene takes the whole window.
    fn toggle_fullscreen_scene(&mut self);

    fn fullscreen_scene(&self) -> bool;
}

impl Service for Box<dyn Editor> {
    const KIND: ServiceKind = ServiceKind::Editor;
}

/// What an editor may touch during update.
pub struct EditorInput<'a> {
    pub input: &'a InputManager,
    scenes: &'a mut SceneManager,
    events: &'a mut EventManager,
}

impl<'a> EditorInput<'a> {
    pub fn new(
        input: &'a InputManager,
        scenes: &'a mut SceneManager,
        events: &'a mut EventManager,
    ) -> Self {
        Self {
            input,
            scenes,
            events,
        }
    }

    pub fn scenes(&self) -> &SceneManager {
        self.scenes
    }

    /// Switches the current scene, posting `SceneChanged` when it changes.
    pub fn select_scene(&mut self, id: SceneId) -> bool {
        if self.scenes.current() == Some(id) {
            return true;
        }
        if !self.scenes.set_current(id) {
            return false;
        }

        let name = self
            .scenes
            .current_scene()
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        self.events.post(EngineEvent::SceneChanged { id, name });
        true
    }
}

/// Read-only engine state handed to `Editor::draw`.
pub struct EditorView<'a> {
    pub scenes: &'a SceneManager,
    pub resources: &'a ResourceManager,
    pub frame: FrameTime,
}
