use crate::resources::ResourceCache;
use crate::time::FrameTime;

/// Per-update context passed to [`super::Layer::on_update`].
///
/// Requests made through the context are applied by the application after the
/// whole update pass has run.
pub struct UpdateCtx<'a> {
    pub time: FrameTime,
    pub resources: &'a mut ResourceCache,
    stop_requested: bool,
}

impl<'a> UpdateCtx<'a> {
    pub fn new(time: FrameTime, resources: &'a mut ResourceCache) -> Self {
        Self {
            time,
            resources,
            stop_requested: false,
        }
    }

    /// Asks the application to stop once the current frame is presented.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}
