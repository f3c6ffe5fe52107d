use crate::services::{Service, ServiceKind};
use crate::window::Window;

use super::{Scene, SceneId, SceneState};

/// Scene service: owns every scene and tracks the current one.
#[derive(Default)]
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
    current: Option<SceneId>,
    state: SceneState,
}

impl Service for SceneManager {
    const KIND: ServiceKind = ServiceKind::SceneManager;
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scene. The first scene added becomes current.
    pub fn add(&mut self, scene: Box<dyn Scene>) -> SceneId {
        let id = SceneId::new(self.scenes.len());
        log::debug!("scene added: {} ({:?})", scene.name(), id);
        self.scenes.push(scene);
        if self.current.is_none() {
            self.current = Some(id);
        }
        id
    }

    /// Makes `id` current and enables it. Returns `false` for an unknown id;
    /// selecting the current scene again is a no-op that returns `true`.
    pub fn set_current(&mut self, id: SceneId) -> bool {
        if id.index() >= self.scenes.len() {
            log::warn!("no scene with index {}", id.index());
            return false;
        }
        if self.current == Some(id) {
            return true;
        }

        self.current = Some(id);
        self.enable_current();
        true
    }

    pub fn current(&self) -> Option<SceneId> {
        self.current
    }

    pub fn current_scene(&self) -> Option<&dyn Scene> {
        let id = self.current?;
        self.scenes.get(id.index()).map(|s| s.as_ref())
    }

    fn current_scene_mut(&mut self) -> Option<&mut Box<dyn Scene>> {
        let id = self.current?;
        self.scenes.get_mut(id.index())
    }

    pub fn enable_current(&mut self) {
        if let Some(scene) = self.current_scene_mut() {
            log::info!("scene enabled: {}", scene.name());
            scene.on_enable();
        }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn set_state(&mut self, state: SceneState) {
        if self.state != state {
            log::debug!("scene state: {} -> {}", self.state, state);
            self.state = state;
        }
    }

    /// Switches to `state`, or back to `Running` if already in it.
    pub fn toggle_state(&mut self, state: SceneState) -> SceneState {
        let next = if self.state == state {
            SceneState::Running
        } else {
            state
        };
        self.set_state(next);
        next
    }

    pub fn update(&mut self, dt: f64) {
        let state = self.state;
        if let Some(scene) = self.current_scene_mut() {
            scene.update(dt, state);
        }
    }

    pub fn draw(&self, window: &mut dyn Window) {
        if let Some(scene) = self.current_scene() {
            scene.draw(window);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.name())
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
