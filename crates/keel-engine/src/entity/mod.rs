//! Entity creation.
//!
//! `EntityFactory` hands out `GameObject`s with ids that are unique for the
//! lifetime of the factory.

use std::fmt;

use crate::services::{Service, ServiceKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named object living in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    id: EntityId,
    name: String,
    pub position: [f32; 3],
    pub enabled: bool,
}

impl GameObject {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub struct EntityFactory {
    next: u64,
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for EntityFactory {
    const KIND: ServiceKind = ServiceKind::EntityFactory;
}

impl EntityFactory {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn spawn(&mut self, name: impl Into<String>) -> GameObject {
        let id = EntityId(self.next);
        self.next += 1;

        let obj = GameObject {
            id,
            name: name.into(),
            position: [0.0; 3],
            enabled: true,
        };
        log::trace!("spawned {} \"{}\"", obj.id, obj.name);
        obj
    }

    /// Number of objects spawned so far.
    pub fn spawned(&self) -> u64 {
        self.next - 1
    }
}
