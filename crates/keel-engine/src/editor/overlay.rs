use std::fmt::Write as _;

use crate::events::EngineEvent;
use crate::input::{Key, KeyState};
use crate::scene::SceneId;
use crate::window::Window;

use super::{Editor, EditorInput, EditorView};

/// Minimal editor that reports engine status in the window title.
///
/// Number keys `1`..`9` select scenes; `F1` toggles the FPS readout.
#[derive(Debug)]
pub struct StatusOverlay {
    title: String,
    show_fps: bool,
    fullscreen_scene: bool,
    events_seen: u64,
}

impl StatusOverlay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_fps: true,
            fullscreen_scene: false,
            events_seen: 0,
        }
    }

    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    fn compose(&self, view: &EditorView<'_>) -> String {
        let mut out = self.title.clone();

        match view.scenes.current_scene() {
            Some(scene) => {
                let _ = write!(
                    out,
                    " | {} ({} objects)",
                    scene.name(),
                    scene.objects().len()
                );
            }
            None => out.push_str(" | no scene"),
        }

        let _ = write!(out, " | {} resources", view.resources.len());

        if self.show_fps {
            let _ = write!(out, " | {:.2} fps", view.frame.frame_rate);
        }

        let _ = write!(out, " | {}", view.scenes.state());

        if self.fullscreen_scene {
            out.push_str(" [fullscreen]");
        }
        out
    }
}

impl Editor for StatusOverlay {
    fn update(&mut self, input: &mut EditorInput<'_>) {
        if input.input.frame_key_action(Key::F1, KeyState::Pressed) {
            self.show_fps = !self.show_fps;
        }

        // Several number keys in one frame: the highest wins.
        let picked = input
            .input
            .frame()
            .keys_pressed
            .iter()
            .filter_map(|k| k.digit_index())
            .max();

        if let Some(idx) = picked {
            input.select_scene(SceneId::new(idx));
        }
    }

    fn on_event(&mut self, event: &EngineEvent) {
        self.events_seen += 1;
        log::debug!("editor saw {event:?}");
    }

    fn draw(&mut self, view: &EditorView<'_>, window: &mut dyn Window) {
        window.set_title(&self.compose(view));
    }

    fn toggle_fullscreen_scene(&mut self) {
        self.fullscreen_scene = !self.fullscreen_scene;
        log::debug!("fullscreen scene: {}", self.fullscreen_scene);
    }

    fn fullscreen_scene(&self) -> bool {
        self.fullscreen_scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityFactory;
    use crate::events::EventManager;
    use crate::input::{InputEvent, InputManager};
    use crate::resources::{Resource, ResourceKind, ResourceManager};
    use crate::scene::{GameObject, Scene, SceneManager, SceneState};
    use crate::time::FrameTime;
    use crate::window::HeadlessWindow;

    struct Named(&'static str, Vec<GameObject>);

    impl Scene for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn update(&mut self, _dt: f64, _state: SceneState) {}

        fn objects(&self) -> &[GameObject] {
            &self.1
        }
    }

    fn two_scenes() -> SceneManager {
        let mut factory = EntityFactory::new();
        let mut sm = SceneManager::new();
        sm.add(Box::new(Named("first", vec![factory.spawn("a"), factory.spawn("b")])));
        sm.add(Box::new(Named("second", Vec::new())));
        sm
    }

    fn frame(rate: f64) -> FrameTime {
        FrameTime {
            delta_time: 0.0,
            frame_rate: rate,
            frame_index: 0,
        }
    }

    // ── title ─────────────────────────────────────────────────────────────

    #[test]
    fn title_reports_scene_resources_fps_and_state() {
        let sm = two_scenes();
        let mut rm = ResourceManager::new();
        rm.add("cube", Resource { kind: ResourceKind::Mesh, source: None });

        let mut overlay = StatusOverlay::new("keel");
        let mut window = HeadlessWindow::new(8, 8);
        let view = EditorView { scenes: &sm, resources: &rm, frame: frame(59.5) };
        overlay.draw(&view, &mut window);

        assert_eq!(
            window.title(),
            "keel | first (2 objects) | 1 resources | 59.50 fps | running"
        );
    }

    #[test]
    fn fullscreen_toggle_is_reflected() {
        let sm = SceneManager::new();
        let rm = ResourceManager::new();
        let mut overlay = StatusOverlay::new("t");
        overlay.toggle_fullscreen_scene();
        assert!(overlay.fullscreen_scene());

        let view = EditorView { scenes: &sm, resources: &rm, frame: frame(0.0) };
        let title = overlay.compose(&view);
        assert!(title.starts_with("t | no scene"));
        assert!(title.ends_with("[fullscreen]"));
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn number_key_selects_scene_and_posts_event() {
        let mut sm = two_scenes();
        let mut events = EventManager::new();
        let mut input = InputManager::new();
        input.apply_event(InputEvent::key(Key::Digit2, KeyState::Pressed));

        let mut overlay = StatusOverlay::new("t");
        overlay.update(&mut EditorInput::new(&input, &mut sm, &mut events));

        assert_eq!(sm.current(), Some(SceneId::new(1)));
        assert!(matches!(
            events.drain().as_slice(),
            [EngineEvent::SceneChanged { name, .. }] if name == "second"
        ));
    }

    #[test]
    fn number_key_past_last_scene_is_ignored() {
        let mut sm = two_scenes();
        let mut events = EventManager::new();
        let mut input = InputManager::new();
        input.apply_event(InputEvent::key(Key::Digit9, KeyState::Pressed));

        StatusOverlay::new("t").update(&mut EditorInput::new(&input, &mut sm, &mut events));

        assert_eq!(sm.current(), Some(SceneId::new(0)));
        assert!(events.is_empty());
    }

    #[test]
    fn f1_hides_fps() {
        let mut sm = SceneManager::new();
        let rm = ResourceManager::new();
        let mut events = EventManager::new();
        let mut input = InputManager::new();
        input.apply_event(InputEvent::key(Key::F1, KeyState::Pressed));

        let mut overlay = StatusOverlay::new("t");
        overlay.update(&mut EditorInput::new(&input, &mut sm, &mut events));

        let view = EditorView { scenes: &sm, resources: &rm, frame: frame(30.0) };
        assert!(!overlay.compose(&view).contains("fps"));
    }
}
