use std::fmt;

/// Closed set of engine service slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ServiceKind {
    ResourceManager,
    InputManager,
    Window,
    EventManager,
    SceneManager,
    EntityFactory,
    Editor,
}

impl ServiceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ServiceKind; 7] = [
        ServiceKind::ResourceManager,
        ServiceKind::InputManager,
        ServiceKind::Window,
        ServiceKind::EventManager,
        ServiceKind::SceneManager,
        ServiceKind::EntityFactory,
        ServiceKind::Editor,
    ];

    /// Kinds that must be registered before the engine may enter its run loop.
    ///
    /// The editor overlay is optional; a headless run has none.
    pub const REQUIRED: [ServiceKind; 6] = [
        ServiceKind::ResourceManager,
        ServiceKind::InputManager,
        ServiceKind::Window,
        ServiceKind::EventManager,
        ServiceKind::SceneManager,
        ServiceKind::EntityFactory,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::ResourceManager => "resource manager",
            ServiceKind::InputManager => "input manager",
            ServiceKind::Window => "window",
            ServiceKind::EventManager => "event manager",
            ServiceKind::SceneManager => "scene manager",
            ServiceKind::EntityFactory => "entity factory",
            ServiceKind::Editor => "editor",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
