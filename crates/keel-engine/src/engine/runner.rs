use std::cell::RefMut;
use std::time::Duration;

use crate::config::EngineConfig;
use crate::editor::{Editor, EditorInput, EditorView};
use crate::entity::EntityFactory;
use crate::events::{EngineEvent, EventManager};
use crate::input::{InputManager, Key, KeyState};
use crate::resources::ResourceManager;
use crate::scene::{SceneManager, SceneState};
use crate::services::{ServiceKind, ServiceRegistry};
use crate::time::{Clock, FrameTime, FrameTimer, MonotonicClock};
use crate::window::Window;

use super::{EngineContext, EngineError, EngineResult, EngineState, RunFlag, Subsystems};

/// The application loop.
///
/// Lifecycle: `startup` → repeated `iterate` while running → `shutdown`.
/// `run` does all three against the monotonic clock. Dropping a started
/// engine shuts it down.
pub struct Engine<S: Subsystems> {
    config: EngineConfig,
    subsystems: S,
    ctx: EngineContext,
    timer: Option<FrameTimer>,
    state: EngineState,
}

impl<S: Subsystems> Engine<S> {
    /// Validates `config`; nothing is started yet.
    pub fn new(config: EngineConfig, subsystems: S) -> EngineResult<Self> {
        config.validate()?;
        let ctx = EngineContext::new(&config);

        Ok(Self {
            config,
            subsystems,
            ctx,
            timer: None,
            state: EngineState::Uninitialized,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.ctx.registry
    }

    pub fn subsystems(&self) -> &S {
        &self.subsystems
    }

    /// Timing of the last executed frame.
    pub fn frame_time(&self) -> FrameTime {
        self.ctx.frame
    }

    pub fn timer(&self) -> Option<&FrameTimer> {
        self.timer.as_ref()
    }

    pub fn run_flag(&self) -> RunFlag {
        self.ctx.run_flag.clone()
    }

    pub fn is_running(&self) -> bool {
        self.ctx.run_flag.is_running()
    }

    /// Asks the loop to stop after the current iteration.
    pub fn stop(&self) {
        self.ctx.run_flag.stop();
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Runs subsystem startup and arms the frame timer at `now` (seconds).
    ///
    /// Every required slot must hold its concrete service type. On failure the
    /// engine stays `Uninitialized` and whatever was registered is dropped
    /// without a teardown.
    pub fn startup(&mut self, now: f64) -> EngineResult<()> {
        self.expect_state(EngineState::Uninitialized, "start up")?;
        log::info!("engine starting up");

        if let Err(e) = self.subsystems.startup(&mut self.ctx.registry, &self.config) {
            self.discard_registrations();
            return Err(EngineError::Startup(e.context("subsystem startup failed")));
        }

        if let Err(e) = prepare_services(&self.ctx.registry) {
            self.discard_registrations();
            return Err(EngineError::Startup(e));
        }
        self.ctx.registry.lock(true);

        let timing = &self.config.timing;
        let timer = FrameTimer::new(timing.max_fps, timing.print_period, now);
        self.ctx.frame = timer.snapshot();
        self.timer = Some(timer);

        self.ctx.run_flag.set_running(true);
        self.state = EngineState::Running;

        log::info!(
            "engine running ({} services, max {} fps)",
            self.ctx.registry.len(),
            timing.max_fps
        );
        Ok(())
    }

    /// One host iteration at `now`. Returns whether a frame ran.
    ///
    /// A frame that starts always completes, even if it stops the engine.
    /// Once the run flag is clear the engine moves to `ShuttingDown`.
    pub fn iterate(&mut self, now: f64) -> EngineResult<bool> {
        self.expect_state(EngineState::Running, "iterate")?;

        let Some(timer) = self.timer.as_mut() else {
            return Err(EngineError::InvalidState {
                op: "iterate without a frame timer",
                state: self.state,
            });
        };
        let frame = if timer.advance(now) {
            Some(timer.snapshot())
        } else {
            None
        };

        if let Some(frame) = frame {
            if let Err(e) = self.run_frame(frame) {
                log::error!("frame {} failed: {e}", frame.frame_index);
                self.ctx.run_flag.stop();
                self.state = EngineState::ShuttingDown;
                return Err(e);
            }

            if let Some(timer) = self.timer.as_mut() {
                self.ctx.frame = timer.frame_executed();
            }
        }

        if !self.ctx.run_flag.is_running() {
            log::info!("engine shutting down");
            self.state = EngineState::ShuttingDown;
        }

        Ok(frame.is_some())
    }

    /// Unlocks the registry, runs subsystem teardown and releases what is
    /// left. Does nothing unless the engine was started and not yet shut down.
    pub fn shutdown(&mut self) {
        match self.state {
            EngineState::Running | EngineState::ShuttingDown => {}
            EngineState::Uninitialized | EngineState::Terminated => return,
        }

        self.ctx.run_flag.stop();
        self.state = EngineState::ShuttingDown;

        self.ctx.registry.lock(false);
        self.subsystems.teardown(&mut self.ctx.registry);
        self.discard_registrations();

        self.state = EngineState::Terminated;
        log::info!("engine terminated");
    }

    /// Runs until stopped, pacing frames against the monotonic clock.
    /// Ctrl+C stops the loop.
    pub fn run(&mut self) -> EngineResult<()> {
        if let Err(e) = self.ctx.run_flag.install_ctrlc() {
            log::warn!("Ctrl+C handler not installed: {e:#}");
        }
        self.run_with_clock(&mut MonotonicClock::new())
    }

    /// `startup`, loop, `shutdown` against `clock`.
    ///
    /// A startup error is returned as is. An error from a frame shuts the
    /// engine down and is then returned.
    pub fn run_with_clock(&mut self, clock: &mut dyn Clock) -> EngineResult<()> {
        self.startup(clock.now())?;

        let result = self.main_loop(clock);
        self.shutdown();
        result
    }

    fn main_loop(&mut self, clock: &mut dyn Clock) -> EngineResult<()> {
        while self.state == EngineState::Running && self.ctx.run_flag.is_running() {
            let ran = self.iterate(clock.now())?;

            if !ran && self.config.timing.idle_sleep {
                if let Some(timer) = &self.timer {
                    let remaining = timer.remaining();
                    if remaining > 0.0 {
                        spin_sleep::sleep(Duration::from_secs_f64(remaining));
                    }
                }
            }
        }
        Ok(())
    }

    fn expect_state(&self, want: EngineState, op: &'static str) -> EngineResult<()> {
        if self.state == want {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                op,
                state: self.state,
            })
        }
    }

    fn discard_registrations(&mut self) {
        if let Err(e) = self.ctx.registry.release_all() {
            log::warn!("could not release services: {e}");
        }
    }

    // ── phases ────────────────────────────────────────────────────────────

    fn run_frame(&mut self, frame: FrameTime) -> EngineResult<()> {
        self.new_frame()?;
        self.input()?;
        self.update(frame)?;
        self.draw(frame)
    }

    fn new_frame(&mut self) -> EngineResult<()> {
        let reg = &self.ctx.registry;

        reg.get_mut::<InputManager>()?.begin_frame();
        if let Some(mut editor) = editor(reg)? {
            editor.new_frame();
        }
        Ok(())
    }

    fn input(&mut self) -> EngineResult<()> {
        let reg = &self.ctx.registry;

        let (events, close_requested) = {
            let mut window = reg.get_mut::<Box<dyn Window>>()?;
            let events = window.poll_events();
            (events, window.close_requested())
        };

        reg.get_mut::<InputManager>()?.apply_events(events);

        if close_requested && self.ctx.run_flag.is_running() {
            log::info!("window close requested");
            self.ctx.run_flag.stop();
        }
        Ok(())
    }

    fn update(&mut self, frame: FrameTime) -> EngineResult<()> {
        let reg = &self.ctx.registry;
        let bindings = &self.ctx.bindings;

        reg.get_mut::<SceneManager>()?.update(frame.delta_time);

        let input = reg.get::<InputManager>()?;
        let mut scenes = reg.get_mut::<SceneManager>()?;
        let mut events = reg.get_mut::<EventManager>()?;
        let mut editor = editor(reg)?;

        if let Some(editor) = editor.as_mut() {
            editor.update(&mut EditorInput::new(&input, &mut scenes, &mut events));
        }

        let pressed = |key: Key| input.frame_key_action(key, KeyState::Pressed);

        if pressed(bindings.pause) {
            let state = scenes.toggle_state(SceneState::Paused);
            events.post(EngineEvent::SceneStateChanged(state));
        }

        if pressed(bindings.freeze) {
            let state = scenes.toggle_state(SceneState::Frozen);
            events.post(EngineEvent::SceneStateChanged(state));
        }

        if pressed(bindings.fullscreen) {
            if let Some(editor) = editor.as_mut() {
                editor.toggle_fullscreen_scene();
            }
            events.post(EngineEvent::FullscreenSceneToggled);
        }

        if pressed(bindings.quit) {
            log::info!("quit requested");
            reg.get_mut::<Box<dyn Window>>()?.set_closing(true);
            self.ctx.run_flag.stop();
            events.post(EngineEvent::QuitRequested);
        }

        let pending = events.drain();
        if let Some(editor) = editor.as_mut() {
            for event in &pending {
                editor.on_event(event);
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: FrameTime) -> EngineResult<()> {
        let reg = &self.ctx.registry;

        let mut window = reg.get_mut::<Box<dyn Window>>()?;
        window.clear(self.ctx.clear_color);

        let scenes = reg.get::<SceneManager>()?;

        if let Some(mut editor) = editor(reg)? {
            let resources = reg.get::<ResourceManager>()?;
            let view = EditorView {
                scenes: &scenes,
                resources: &resources,
                frame,
            };
            editor.draw(&view, &mut **window);
        }

        scenes.draw(&mut **window);
        window.swap_buffers();
        Ok(())
    }
}

impl<S: Subsystems> Drop for Engine<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Checks that every required slot holds the type the phases fetch, then
/// enables the current scene. The editor is optional and checked on first use.
fn prepare_services(reg: &ServiceRegistry) -> anyhow::Result<()> {
    let missing = reg.missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|k| k.name()).collect();
        anyhow::bail!("required services not registered: {}", names.join(", "));
    }

    drop(reg.get::<ResourceManager>()?);
    drop(reg.get::<InputManager>()?);
    drop(reg.get::<Box<dyn Window>>()?);
    drop(reg.get::<EventManager>()?);
    drop(reg.get::<EntityFactory>()?);

    reg.get_mut::<SceneManager>()?.enable_current();
    Ok(())
}

/// The editor, if one is registered.
fn editor(reg: &ServiceRegistry) -> EngineResult<Option<RefMut<'_, Box<dyn Editor>>>> {
    if !reg.contains(ServiceKind::Editor) {
        return Ok(None);
    }
    Ok(Some(reg.get_mut::<Box<dyn Editor>>()?))
}
