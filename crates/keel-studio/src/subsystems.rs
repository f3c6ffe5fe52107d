use keel_engine::config::EngineConfig;
use keel_engine::device::GpuInit;
use keel_engine::editor::{Editor, StatusOverlay};
use keel_engine::entity::EntityFactory;
use keel_engine::events::EventManager;
use keel_engine::input::InputManager;
use keel_engine::resources::{Resource, ResourceKind, ResourceManager};
use keel_engine::scene::SceneManager;
use keel_engine::services::ServiceError;
use keel_engine::window::{HeadlessWindow, Window, WinitWindow};
use keel_engine::{Service, ServiceRegistry, Subsystems};

use crate::demo::DemoScene;

/// Builds the studio's services.
pub struct StudioSubsystems {
    headless: bool,
}

impl StudioSubsystems {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }
}

impl Subsystems for StudioSubsystems {
    fn startup(&mut self, registry: &mut ServiceRegistry, config: &EngineConfig) -> anyhow::Result<()> {
        registry.register(builtin_resources())?;
        registry.register(InputManager::new())?;

        let window: Box<dyn Window> = if self.headless {
            log::info!("running headless");
            Box::new(HeadlessWindow::new(config.window.width, config.window.height))
        } else {
            Box::new(WinitWindow::open(&config.window, GpuInit::default())?)
        };
        registry.register(window)?;

        registry.register(EventManager::new())?;

        let mut factory = EntityFactory::new();
        let mut scenes = SceneManager::new();
        scenes.add(Box::new(DemoScene::new("test scene", &mut factory, 3)));
        scenes.add(Box::new(DemoScene::new("viewer scene", &mut factory, 1)));
        registry.register(scenes)?;
        registry.register(factory)?;

        let editor: Box<dyn Editor> = Box::new(StatusOverlay::new(config.window.title.clone()));
        registry.register(editor)?;

        Ok(())
    }

    fn teardown(&mut self, registry: &mut ServiceRegistry) {
        // Consumers go before the services they read; the window goes last so
        // its surface outlives everything that drew into it.
        release::<Box<dyn Editor>>(registry);
        release::<SceneManager>(registry);
        release::<EntityFactory>(registry);
        release::<EventManager>(registry);
        release::<ResourceManager>(registry);
        release::<InputManager>(registry);
        if release::<Box<dyn Window>>(registry) {
            log::info!("window closed");
        }
    }
}

/// Unregisters and drops the `S` instance. An empty slot is not an error.
fn release<S: Service>(registry: &mut ServiceRegistry) -> bool {
    match registry.unregister::<S>() {
        Ok(_) => true,
        Err(ServiceError::ServiceNotFound(_)) => false,
        Err(e) => {
            log::warn!("could not release {}: {e}", S::KIND);
            false
        }
    }
}

fn builtin_resources() -> ResourceManager {
    let mut resources = ResourceManager::new();

    let entries = [
        ("cube", ResourceKind::Mesh, "meshes/cube.obj"),
        ("plane", ResourceKind::Mesh, "meshes/plane.obj"),
        ("basic", ResourceKind::Shader, "shaders/basic.wgsl"),
        ("container", ResourceKind::Material, "materials/container.toml"),
        ("checker", ResourceKind::Texture, "textures/checker.png"),
        ("bip", ResourceKind::Sound, "sounds/bip.wav"),
    ];
    for (name, kind, path) in entries {
        resources.add(
            name,
            Resource {
                kind,
                source: Some(path.to_string()),
            },
        );
    }
    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless_config() -> EngineConfig {
        let mut cfg = EngineConfig::default();
        cfg.window.width = 32;
        cfg.window.height = 24;
        cfg
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn headless_startup_fills_every_slot() {
        let mut registry = ServiceRegistry::new();
        StudioSubsystems::new(true)
            .startup(&mut registry, &headless_config())
            .unwrap();

        assert!(registry.all_required_loaded());
        assert!(registry.contains(keel_engine::ServiceKind::Editor));
        assert_eq!(registry.get::<SceneManager>().unwrap().len(), 2);
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn teardown_empties_the_registry() {
        let mut registry = ServiceRegistry::new();
        let mut subs = StudioSubsystems::new(true);
        subs.startup(&mut registry, &headless_config()).unwrap();

        subs.teardown(&mut registry);
        assert!(registry.is_empty());
    }

    #[test]
    fn teardown_skips_missing_slots() {
        let mut registry = ServiceRegistry::new();
        registry.register(InputManager::new()).unwrap();

        StudioSubsystems::new(true).teardown(&mut registry);
        assert!(registry.is_empty());
    }

    #[test]
    fn teardown_leaves_a_locked_registry_alone() {
        let mut registry = ServiceRegistry::new();
        registry.register(EventManager::new()).unwrap();
        registry.lock(true);

        StudioSubsystems::new(true).teardown(&mut registry);
        assert_eq!(registry.len(), 1);
    }
}
