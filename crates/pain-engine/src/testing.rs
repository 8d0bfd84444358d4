//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use image::RgbaImage;

use crate::device::PresentStatus;
use crate::error::LoadError;
use crate::event::Event;
use crate::layer::{Layer, Propagation, UpdateCtx};
use crate::resources::{Surface, SurfaceLoader};
use crate::window::Backend;

/// Shared, ordered log of hook invocations.
#[derive(Clone, Default)]
pub(crate) struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    /// Returns everything recorded so far and empties the log.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Layer that records every hook as `<name>.<hook>`.
pub(crate) struct RecordingLayer {
    name: String,
    log: Recorder,
    consume: bool,
    stop_on_update: bool,
}

impl RecordingLayer {
    pub fn new(name: &str, log: &Recorder) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            consume: false,
            stop_on_update: false,
        }
    }

    /// Stops propagation of every event it sees.
    pub fn consuming(mut self) -> Self {
        self.consume = true;
        self
    }

    /// Requests an application stop from its first update.
    pub fn stopping(mut self) -> Self {
        self.stop_on_update = true;
        self
    }

    fn record(&self, hook: &str) {
        self.log.push(format!("{}.{hook}", self.name));
    }
}

impl Layer for RecordingLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_attach(&mut self) {
        self.record("attach");
    }

    fn on_detach(&mut self) {
        self.record("detach");
    }

    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) {
        self.record("update");
        if self.stop_on_update {
            ctx.request_stop();
        }
    }

    fn on_event(&mut self, _event: &Event) -> Propagation {
        self.record("event");
        if self.consume {
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }
}

/// Loader that fabricates 1x1 surfaces and counts invocations.
#[derive(Clone, Default)]
pub(crate) struct CountingLoader {
    calls: Rc<Cell<usize>>,
    failing: Rc<HashSet<String>>,
}

impl CountingLoader {
    pub fn failing<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            calls: Rc::default(),
            failing: Rc::new(paths.into_iter().map(str::to_string).collect()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SurfaceLoader for CountingLoader {
    fn load(&mut self, path: &str) -> Result<Surface, LoadError> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.contains(path) {
            return Err(LoadError::Decode {
                path: path.to_string(),
                source: image::ImageError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no such file",
                )),
            });
        }
        Ok(Surface::new(RgbaImage::new(1, 1)))
    }
}

/// Backend that replays one batch of events per poll.
///
/// Once the script runs out every poll yields [`Event::Quit`].
pub(crate) struct ScriptedBackend {
    frames: VecDeque<Vec<Event>>,
    log: Recorder,
    status: PresentStatus,
}

impl ScriptedBackend {
    pub fn new(log: &Recorder, frames: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            log: log.clone(),
            status: PresentStatus::Presented,
        }
    }

    pub fn with_present_status(mut self, status: PresentStatus) -> Self {
        self.status = status;
        self
    }
}

impl Backend for ScriptedBackend {
    fn poll_events(&mut self, _timeout: Duration, events: &mut Vec<Event>) {
        self.log.push("poll");
        match self.frames.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(Event::Quit),
        }
    }

    fn present(&mut self) -> PresentStatus {
        self.log.push("present");
        self.status
    }
}

impl Drop for ScriptedBackend {
    fn drop(&mut self) {
        self.log.push("backend.drop");
    }
}
