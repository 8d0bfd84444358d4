use std::time::{Duration, Instant};

/// Caps the main loop to a target frame rate.
///
/// After a frame's work is done, [`FrameLimiter::wait`] sleeps for whatever is
/// left of the frame budget. An unlimited limiter never sleeps.
#[derive(Debug, Copy, Clone, Default)]
pub struct FrameLimiter {
    budget: Option<Duration>,
}

impl FrameLimiter {
    /// `None` or `Some(0)` disables limiting.
    pub fn new(max_fps: Option<u32>) -> Self {
        let budget = max_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs(1) / fps);
        Self { budget }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time still to wait for a frame that has been running for `spent`.
    pub fn remaining(&self, spent: Duration) -> Option<Duration> {
        let budget = self.budget?;
        budget.checked_sub(spent).filter(|left| !left.is_zero())
    }

    pub fn wait(&self, frame_start: Instant) {
        if let Some(left) = self.remaining(frame_start.elapsed()) {
            std::thread::sleep(left);
        }
    }
}
