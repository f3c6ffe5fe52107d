//! Resource registry.
//!
//! Resources are named descriptors only; nothing is loaded from disk.

use std::collections::BTreeMap;
use std::fmt;

use crate::services::{Service, ServiceKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    Mesh,
    Shader,
    Material,
    Texture,
    Sound,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Mesh => "mesh",
            ResourceKind::Shader => "shader",
            ResourceKind::Material => "material",
            ResourceKind::Texture => "texture",
            ResourceKind::Sound => "sound",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    /// Where the asset would be loaded from, if anywhere.
    pub source: Option<String>,
}

#[derive(Debug, Default)]
pub struct ResourceManager {
    entries: BTreeMap<String, Resource>,
}

impl Service for ResourceManager {
    const KIND: ServiceKind = ServiceKind::ResourceManager;
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resource` under `name`, returning the one it replaced.
    pub fn add(&mut self, name: impl Into<String>, resource: Resource) -> Option<Resource> {
        let name = name.into();
        log::debug!("resource added: {name} ({})", resource.kind);
        let prev = self.entries.insert(name, resource);
        if let Some(p) = &prev {
            log::warn!("resource replaced a previous {}", p.kind);
        }
        prev
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resources in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn count_of(&self, kind: ResourceKind) -> usize {
        self.entries.values().filter(|r| r.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
