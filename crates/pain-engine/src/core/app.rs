use std::time::{Duration, Instant};

use crate::device::PresentStatus;
use crate::error::InitError;
use crate::event::Event;
use crate::layer::{Layer, LayerId, LayerStack, UpdateCtx};
use crate::resources::ResourceCache;
use crate::time::{FrameClock, FrameLimiter, FrameTime};
use crate::window::{Backend, WinitBackend};

use super::AppConfig;

/// How long a minimized application waits for events before looping again.
const MINIMIZED_POLL: Duration = Duration::from_millis(16);

/// Lifecycle state. Construction either yields a running application or fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppState {
    Running,
    Stopped,
}

/// Owns the platform backend, the layer stack and the resource cache.
///
/// One application is expected per process. The running and minimized flags
/// are only changed by event handling, [`Application::stop`] and stop
/// requests made through [`UpdateCtx`]; the loop reads them between frames.
pub struct Application<B: Backend = WinitBackend> {
    layers: LayerStack,
    resources: ResourceCache,
    backend: B,

    clock: FrameClock,
    limiter: FrameLimiter,
    state: AppState,
    minimized: bool,

    /// Reused event buffer.
    events: Vec<Event>,
}

impl Application<WinitBackend> {
    /// Opens the window and graphics context described by `config`.
    pub fn new(config: AppConfig) -> Result<Self, InitError> {
        Self::with_backend(config, WinitBackend::open)
    }
}

impl<B: Backend> Application<B> {
    /// Builds an application on top of the backend returned by `open`.
    pub fn with_backend<F>(config: AppConfig, open: F) -> Result<Self, InitError>
    where
        F: FnOnce(&AppConfig) -> Result<B, InitError>,
    {
        let backend = open(&config)?;
        log::info!("application `{}` initialized", config.window.title);

        Ok(Self {
            layers: LayerStack::new(),
            resources: ResourceCache::new(),
            backend,
            clock: FrameClock::new(),
            limiter: FrameLimiter::new(config.max_fps),
            state: AppState::Running,
            minimized: false,
            events: Vec::new(),
        })
    }

    /// Replaces the resource cache, e.g. to plug in another loader.
    pub fn with_resources(mut self, resources: ResourceCache) -> Self {
        self.resources = resources;
        self
    }

    pub fn push_layer<L: Layer + 'static>(&mut self, layer: L) -> LayerId {
        self.layers.push_layer(layer)
    }

    pub fn push_overlay<L: Layer + 'static>(&mut self, layer: L) -> LayerId {
        self.layers.push_overlay(layer)
    }

    pub fn pop_layer(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        self.layers.pop_layer(id)
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn resources(&mut self) -> &mut ResourceCache {
        &mut self.resources
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AppState::Running
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Ends the loop after the current frame. The frame itself still completes.
    pub fn stop(&mut self) {
        if self.state == AppState::Running {
            log::debug!("application stopping");
        }
        self.state = AppState::Stopped;
    }

    /// Runs frames until the application stops.
    pub fn run(&mut self) {
        log::info!("entering main loop");
        self.clock.reset();

        while self.is_running() {
            self.run_frame();
        }

        log::info!("main loop exited");
    }

    /// Runs exactly one frame: events, update, presentation.
    pub fn run_frame(&mut self) {
        let frame_start = Instant::now();

        self.pump_events();

        if !self.minimized {
            let time = self.clock.tick_at(frame_start);
            self.update_layers(time);
            self.present();
        }

        self.limiter.wait(frame_start);
    }

    fn pump_events(&mut self) {
        let timeout = if self.minimized {
            MINIMIZED_POLL
        } else {
            Duration::ZERO
        };

        let mut events = std::mem::take(&mut self.events);
        self.backend.poll_events(timeout, &mut events);

        for event in events.drain(..) {
            self.layers.dispatch_event(&event);
            self.handle_event(&event);
        }

        self.events = events;
    }

    /// Application-level reaction to an event. Runs even if a layer consumed it.
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Quit => {
                log::info!("quit requested");
                self.stop();
            }
            Event::Minimized => {
                log::debug!("window minimized; updates paused");
                self.minimized = true;
            }
            Event::Restored => {
                log::debug!("window restored; updates resumed");
                self.minimized = false;
            }
            Event::Input(input) => {
                if let Some(key) = input.pressed_key() {
                    log::info!("key pressed: {key}");
                }
            }
            Event::Resized { .. } | Event::FocusChanged(_) => {}
        }
    }

    fn update_layers(&mut self, time: FrameTime) {
        let mut ctx = UpdateCtx::new(time, &mut self.resources);
        self.layers.update(&mut ctx);

        if ctx.stop_requested() {
            log::info!("stop requested by a layer");
            self.stop();
        }
    }

    fn present(&mut self) {
        match self.backend.present() {
            PresentStatus::Presented => {}
            PresentStatus::Reconfigured | PresentStatus::Skipped => {
                log::trace!("frame not presented");
            }
            PresentStatus::Fatal => {
                log::error!("presentation failed irrecoverably");
                self.stop();
            }
        }
    }
}

impl<B: Backend> Drop for Application<B> {
    fn drop(&mut self) {
        // Layers go first; the backend field then releases context, window and
        // platform in that order.
        self.layers.clear();
        log::debug!("layer stack torn down");
    }
}
