//! Engine event queue.
//!
//! Events are posted during a frame and drained, in posting order, at the end
//! of the update phase.

use std::collections::VecDeque;

use crate::scene::{SceneId, SceneState};
use crate::services::{Service, ServiceKind};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SceneStateChanged(SceneState),
    SceneChanged { id: SceneId, name: String },
    FullscreenSceneToggled,
    QuitRequested,
}

#[derive(Debug, Default)]
pub struct EventManager {
    queue: VecDeque<EngineEvent>,
}

impl Service for EventManager {
    const KIND: ServiceKind = ServiceKind::EventManager;
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, event: EngineEvent) {
        log::trace!("event posted: {event:?}");
        self.queue.push_back(event);
    }

    /// Removes and returns every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
