//! Scenes and the scene manager.
//!
//! Exactly one scene is current. The manager owns the scene-wide run state
//! (running, paused, frozen); scenes receive it each update and decide what
//! it means for them.

mod manager;

use std::fmt;

use crate::window::Window;

pub use crate::entity::GameObject;
pub use manager::SceneManager;

/// Index of a scene in the order it was added to the manager.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SceneId(usize);

impl SceneId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SceneState {
    #[default]
    Running,
    /// The whole scene is halted.
    Paused,
    /// Actor updates are halted; the scene keeps drawing.
    Frozen,
}

impl fmt::Display for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SceneState::Running => "running",
            SceneState::Paused => "paused",
            SceneState::Frozen => "frozen",
        };
        f.write_str(s)
    }
}

pub trait Scene {
    fn name(&self) -> &str;

    /// Called when the scene becomes current.
    fn on_enable(&mut self) {}

    fn update(&mut self, dt: f64, state: SceneState);

    fn draw(&self, _window: &mut dyn Window) {}

    fn objects(&self) -> &[GameObject];
}
