use std::time::Duration;

use pain_engine::input::{InputEvent, Key};
use pain_engine::{Event, Layer, Propagation, SurfaceHandle, UpdateCtx};

/// Background layer: owns the world sprite and reports the frame rate.
pub struct WorldLayer {
    sprite_path: &'static str,
    sprite: Option<SurfaceHandle>,
    load_attempted: bool,

    frames: u32,
    window: Duration,
}

impl WorldLayer {
    pub fn new(sprite_path: &'static str) -> Self {
        Self {
            sprite_path,
            sprite: None,
            load_attempted: false,
            frames: 0,
            window: Duration::ZERO,
        }
    }
}

impl Layer for WorldLayer {
    fn name(&self) -> &str {
        "world"
    }

    fn on_attach(&mut self) {
        log::info!("world layer attached");
    }

    fn on_detach(&mut self) {
        log::info!("world layer detached");
    }

    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) {
        // A missing sprite is not worth retrying every frame.
        if !self.load_attempted {
            self.load_attempted = true;
            match ctx.resources.get_surface(self.sprite_path) {
                Ok(surface) => {
                    log::info!(
                        "sprite {}x{} ({} bytes)",
                        surface.width(),
                        surface.height(),
                        surface.pixels().len()
                    );
                    self.sprite = Some(surface);
                }
                Err(err) => log::warn!("running without sprite: {err}"),
            }
        }

        self.frames += 1;
        self.window += ctx.time.elapsed;
        if self.window >= Duration::from_secs(1) {
            log::debug!("{} fps", self.frames);
            self.frames = 0;
            self.window = Duration::ZERO;
        }
    }

    fn on_event(&mut self, event: &Event) -> Propagation {
        if let Event::Resized { width, height } = event {
            log::debug!("world viewport {width}x{height}");
        }
        Propagation::Continue
    }
}

/// Top-most overlay. Escape quits; F3 toggles verbose frame logging.
#[derive(Default)]
pub struct DebugOverlay {
    quit_requested: bool,
    verbose: bool,
}

impl Layer for DebugOverlay {
    fn name(&self) -> &str {
        "debug-overlay"
    }

    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.verbose {
            log::debug!("frame {} dt={:.4}s", ctx.time.frame_index, ctx.time.dt);
        }
        if self.quit_requested {
            ctx.request_stop();
        }
    }

    fn on_event(&mut self, event: &Event) -> Propagation {
        match event.as_input().and_then(InputEvent::pressed_key) {
            Some(Key::Escape) => {
                self.quit_requested = true;
                Propagation::Stop
            }
            Some(Key::Function(3)) => {
                self.verbose = !self.verbose;
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    }
}
