//! Frame timing.
//!
//! - `FrameClock` measures the time between consecutive updates
//! - `FrameLimiter` caps the loop rate by sleeping out the rest of a frame

mod frame_clock;
mod limiter;

pub use frame_clock::{FrameClock, FrameTime};
pub use limiter::FrameLimiter;
