use std::time::Duration;

use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::core::AppConfig;
use crate::device::{GraphicsContext, PresentStatus};
use crate::error::InitError;
use crate::event::Event;

use super::minimize::MinimizeTracker;
use super::translate::InputTracker;
use super::Backend;

#[self_referencing]
struct WindowSurface {
    /// The single application window.
    window: Window,

    /// Graphics context whose surface borrows `window`.
    ///
    /// Dropped before the window by construction of the self-reference.
    #[borrows(window)]
    #[covariant]
    context: GraphicsContext<'this>,
}

/// winit event loop + one window + its wgpu context.
///
/// Events are pumped rather than handed to `EventLoop::run_app`, so the caller
/// keeps control of the loop.
pub struct WinitBackend {
    /// Window and graphics context. `Some` until drop.
    surface: Option<WindowSurface>,

    /// Platform subsystem. `Some` until drop, released after `surface`.
    event_loop: Option<EventLoop<()>>,

    /// Modifier and pointer state carried between input events.
    input: InputTracker,

    /// Minimize/restore state derived from resize and occlusion reports.
    minimize: MinimizeTracker,
}

impl WinitBackend {
    /// Brings up the event loop, the window and the graphics context.
    ///
    /// Parameters are validated before anything is acquired. The event loop
    /// can only be created once per process.
    pub fn open(config: &AppConfig) -> Result<Self, InitError> {
        config.window.validate()?;

        let event_loop = EventLoop::new().map_err(InitError::Platform)?;
        log::debug!("platform event loop initialized");

        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(config.window.width),
                f64::from(config.window.height),
            ))
            .with_resizable(config.window.resizable);

        // Creating the window before the loop runs is deprecated in favor of
        // `ActiveEventLoop`, but is still supported on every desktop platform.
        #[allow(deprecated)]
        let window = event_loop.create_window(attrs).map_err(InitError::Window)?;
        log::debug!("window `{}` created", config.window.title);

        let graphics = config.graphics.clone();
        let surface = WindowSurfaceTryBuilder {
            window,
            context_builder: |window| {
                pollster::block_on(GraphicsContext::new(window, graphics))
            },
        }
        .try_build()
        .map_err(|err| InitError::Context(err.into()))?;
        log::info!(
            "graphics context ready ({:?})",
            surface.borrow_context().surface_format()
        );

        Ok(Self {
            surface: Some(surface),
            event_loop: Some(event_loop),
            input: InputTracker::default(),
            minimize: MinimizeTracker::default(),
        })
    }
}

impl Backend for WinitBackend {
    fn poll_events(&mut self, timeout: Duration, events: &mut Vec<Event>) {
        let (Some(event_loop), Some(surface)) = (self.event_loop.as_mut(), self.surface.as_mut())
        else {
            events.push(Event::Quit);
            return;
        };

        let mut pump = EventPump {
            surface,
            input: &mut self.input,
            minimize: &mut self.minimize,
            events: &mut *events,
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(timeout), &mut pump) {
            log::debug!("platform event loop exited with code {code}");
            events.push(Event::Quit);
        }
    }

    fn present(&mut self) -> PresentStatus {
        let Some(surface) = self.surface.as_mut() else {
            return PresentStatus::Fatal;
        };

        surface.with_mut(|fields| {
            fields.window.pre_present_notify();
            fields.context.present()
        })
    }
}

impl Drop for WinitBackend {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.take() {
            // `into_heads` drops the borrowing context before returning the window.
            let heads = surface.into_heads();
            log::debug!("graphics context destroyed");
            drop(heads.window);
            log::debug!("window destroyed");
        }

        if self.event_loop.take().is_some() {
            log::debug!("platform event loop released");
        }
    }
}

/// Collects one pump's worth of events.
struct EventPump<'a> {
    /// Resized along with the window.
    surface: &'a mut WindowSurface,
    /// Backend input state.
    input: &'a mut InputTracker,
    /// Backend minimize state.
    minimize: &'a mut MinimizeTracker,
    /// Output queue for this pump.
    events: &'a mut Vec<Event>,
}

impl EventPump<'_> {
    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.surface.with_context_mut(|context| context.resize(size));
        self.minimize.resized(size, self.events);
    }
}

impl ApplicationHandler for EventPump<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.events.push(Event::Quit);
            }

            WindowEvent::Resized(size) => self.resize(*size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.surface.borrow_window().inner_size();
                self.resize(size);
            }

            WindowEvent::Occluded(occluded) => self.events.extend(self.minimize.set(*occluded)),

            WindowEvent::Focused(focused) => self.events.push(Event::FocusChanged(*focused)),

            _ => {
                let scale = self.surface.borrow_window().scale_factor();
                if let Some(input) = self.input.translate(scale, &event) {
                    self.events.push(Event::Input(input));
                }
            }
        }
    }
}
