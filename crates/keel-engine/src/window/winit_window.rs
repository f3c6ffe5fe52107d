use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as OsWindow, WindowId};

use crate::config::WindowConfig;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::{translate_window_event, TranslateState};
use crate::input::InputEvent;

use super::{ClearColor, Window};

/// Upper bound on pumps spent waiting for the platform to deliver `resumed`.
const OPEN_ATTEMPTS: u32 = 200;

/// Desktop window driven by a pumped winit event loop.
///
/// The engine owns the loop, so instead of handing control to
/// `EventLoop::run_app`, every input phase pumps pending platform events
/// without blocking.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    host: Host,
}

/// Receives winit callbacks during a pump.
struct Host {
    config: WindowConfig,
    gpu_init: GpuInit,

    window: Option<Arc<OsWindow>>,
    gpu: Option<Gpu>,

    translate: TranslateState,
    events: Vec<InputEvent>,

    close_requested: bool,
    open_error: Option<anyhow::Error>,
}

impl WinitWindow {
    /// Creates the event loop, the OS window and its GPU surface.
    pub fn open(config: &WindowConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut host = Host {
            config: config.clone(),
            gpu_init,
            window: None,
            gpu: None,
            translate: TranslateState::default(),
            events: Vec::new(),
            close_requested: false,
            open_error: None,
        };

        // The window can only be created from inside `resumed`.
        for _ in 0..OPEN_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(Duration::from_millis(5)), &mut host);

            if let Some(err) = host.open_error.take() {
                return Err(err);
            }
            if host.gpu.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited with code {code} before the window opened");
            }
        }

        anyhow::ensure!(host.gpu.is_some(), "platform never resumed; no window was created");

        log::info!(
            "window opened: \"{}\" {}x{}",
            host.config.title,
            host.config.width,
            host.config.height
        );

        Ok(Self { event_loop, host })
    }
}

impl Window for WinitWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);

        if let PumpStatus::Exit(code) = status {
            log::info!("event loop exited with code {code}");
            self.host.close_requested = true;
        }

        std::mem::take(&mut self.host.events)
    }

    fn close_requested(&self) -> bool {
        self.host.close_requested
    }

    fn set_closing(&mut self, closing: bool) {
        self.host.close_requested = closing;
    }

    fn set_title(&mut self, title: &str) {
        if let Some(w) = &self.host.window {
            if w.title() != title {
                w.set_title(title);
            }
        }
    }

    fn clear(&mut self, color: ClearColor) {
        let Some(gpu) = self.host.gpu.as_mut() else {
            return;
        };

        if let Err(SurfaceErrorAction::Fatal) = gpu.begin_frame(color.into()) {
            log::error!("unrecoverable surface error; closing window");
            self.host.close_requested = true;
        }
    }

    fn swap_buffers(&mut self) {
        if let Some(gpu) = self.host.gpu.as_mut() {
            gpu.present();
        }
    }

    fn inner_size(&self) -> (u32, u32) {
        self.host
            .gpu
            .as_ref()
            .map(|g| (g.size().width, g.size().height))
            .unwrap_or((0, 0))
    }
}

impl Host {
    fn create(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = OsWindow::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone()))
            .context("GPU initialization failed")?;

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn owns(&self, id: WindowId) -> bool {
        self.window.as_ref().is_some_and(|w| w.id() == id)
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create(event_loop) {
            log::error!("failed to open window: {e:#}");
            self.open_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if !self.owns(id) {
            return;
        }

        if let Some(window) = &self.window {
            if let Some(ev) = translate_window_event(window, &mut self.translate, &event) {
                self.events.push(ev);
            }
        }

        match event {
            WindowEvent::CloseRequested => self.close_requested = true,

            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(gpu)) = (&self.window, self.gpu.as_mut()) {
                    gpu.resize(window.inner_size());
                }
            }

            _ => {}
        }
    }
}
