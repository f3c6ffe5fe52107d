use crate::config::EngineConfig;
use crate::services::ServiceRegistry;

/// Startup and teardown hooks that populate and drain the registry.
///
/// `startup` must register every required service (all kinds but the
/// editor). `teardown` runs once, after the registry is unlocked, and may
/// unregister services in whatever order they need to be destroyed; anything
/// left is released by the engine afterwards.
pub trait Subsystems {
    fn startup(&mut self, registry: &mut ServiceRegistry, config: &EngineConfig) -> anyhow::Result<()>;

    fn teardown(&mut self, registry: &mut ServiceRegistry);
}
