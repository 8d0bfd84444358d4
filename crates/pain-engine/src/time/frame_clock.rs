use std::time::{Duration, Instant};

/// Timing snapshot handed to layer updates.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Elapsed time since the previous update, in seconds.
    pub dt: f32,

    /// Same as `dt`, unrounded.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Number of updates that happened before this one.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots from a monotonic clock.
///
/// Elapsed time is clamped: a frame never reports less than `dt_min` (tight
/// loops on coarse timers) nor more than `dt_max` (debugger pauses, long
/// minimization).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Moves the baseline to now without producing a frame.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// A `now` earlier than the previous tick counts as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let time = FrameTime {
            dt: elapsed.as_secs_f32(),
            elapsed,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn reports_time_since_previous_tick() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);

        let t = clock.tick_at(start + ms(16));
        assert_eq!(t.elapsed, ms(16));
        assert!((t.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        let indices: Vec<u64> = (0..3)
            .map(|i| clock.tick_at(start + ms(10 * i)).frame_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn long_stall_is_clamped_to_max() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let t = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(t.elapsed, FrameClock::DEFAULT_DT_MAX);
    }

    #[test]
    fn zero_or_backwards_time_is_clamped_to_min() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(100));
        let start = Instant::now() + ms(50);
        clock.tick_at(start);
        assert_eq!(clock.tick_at(start).elapsed, ms(1));
        assert_eq!(clock.tick_at(start - ms(20)).elapsed, ms(1));
    }
}
