use std::time::Duration;

use crate::device::PresentStatus;
use crate::event::Event;

/// Platform collaborator driven by the application loop.
///
/// Teardown happens in `Drop`: graphics context first, then the window, then
/// the platform subsystem.
pub trait Backend {
    /// Drains every pending native event into `events`.
    ///
    /// When nothing is queued the call may block for up to `timeout`.
    fn poll_events(&mut self, timeout: Duration, events: &mut Vec<Event>);

    /// Presents the frame. Called once per frame while not minimized.
    fn present(&mut self) -> PresentStatus;
}
