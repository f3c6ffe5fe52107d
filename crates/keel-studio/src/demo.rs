use keel_engine::entity::EntityFactory;
use keel_engine::scene::{GameObject, Scene, SceneState};

/// Objects orbiting the origin.
///
/// Paused halts everything; frozen keeps the clock running but leaves the
/// objects where they are.
pub struct DemoScene {
    name: String,
    objects: Vec<GameObject>,
    elapsed: f64,
}

impl DemoScene {
    pub fn new(name: &str, factory: &mut EntityFactory, count: usize) -> Self {
        let objects = (0..count)
            .map(|i| factory.spawn(format!("{name} object {i}")))
            .collect();

        Self {
            name: name.to_string(),
            objects,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Scene for DemoScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_enable(&mut self) {
        log::debug!("{} enabled with {} objects", self.name, self.objects.len());
    }

    fn update(&mut self, dt: f64, state: SceneState) {
        if state == SceneState::Paused {
            return;
        }
        self.elapsed += dt;
        if state == SceneState::Frozen {
            return;
        }

        let count = self.objects.len().max(1) as f64;
        for (i, obj) in self.objects.iter_mut().enumerate() {
            let phase = self.elapsed + i as f64 * std::f64::consts::TAU / count;
            obj.position = [phase.cos() as f32 * 2.0, 0.0, phase.sin() as f32 * 2.0];
        }
    }

    fn objects(&self) -> &[GameObject] {
        &self.objects
    }
}
