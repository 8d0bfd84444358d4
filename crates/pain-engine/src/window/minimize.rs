use winit::dpi::PhysicalSize;

use crate::event::Event;

/// Turns size and occlusion reports into minimize/restore transitions.
///
/// A zero-area size or occlusion means minimized; a drawable size or the end
/// of occlusion means restored. Each transition is reported once.
#[derive(Debug, Default)]
pub(super) struct MinimizeTracker {
    minimized: bool,
}

impl MinimizeTracker {
    /// Records the new state, returning the transition event if it changed.
    pub fn set(&mut self, minimized: bool) -> Option<Event> {
        if self.minimized == minimized {
            return None;
        }
        self.minimized = minimized;
        Some(if minimized {
            Event::Minimized
        } else {
            Event::Restored
        })
    }

    /// Handles a resize: pushes any transition, then `Resized` for a drawable size.
    pub fn resized(&mut self, size: PhysicalSize<u32>, events: &mut Vec<Event>) {
        let drawable = size.width > 0 && size.height > 0;
        events.extend(self.set(!drawable));
        if drawable {
            events.push(Event::Resized {
                width: size.width,
                height: size.height,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize(tracker: &mut MinimizeTracker, width: u32, height: u32) -> Vec<Event> {
        let mut events = Vec::new();
        tracker.resized(PhysicalSize::new(width, height), &mut events);
        events
    }

    #[test]
    fn zero_size_then_drawable_size_minimizes_and_restores() {
        let mut tracker = MinimizeTracker::default();

        assert_eq!(resize(&mut tracker, 0, 0), [Event::Minimized]);

        assert_eq!(
            resize(&mut tracker, 800, 600),
            [Event::Restored, Event::Resized { width: 800, height: 600 }]
        );
    }

    #[test]
    fn repeated_zero_sizes_report_one_minimize() {
        let mut tracker = MinimizeTracker::default();
        assert_eq!(resize(&mut tracker, 0, 0), [Event::Minimized]);
        assert!(resize(&mut tracker, 0, 0).is_empty());
        assert!(resize(&mut tracker, 640, 0).is_empty());
    }

    #[test]
    fn plain_resize_is_not_a_transition() {
        let mut tracker = MinimizeTracker::default();
        assert_eq!(
            resize(&mut tracker, 1024, 768),
            [Event::Resized { width: 1024, height: 768 }]
        );
    }

    #[test]
    fn occlusion_toggles_once_per_change() {
        let mut tracker = MinimizeTracker::default();
        assert_eq!(tracker.set(true), Some(Event::Minimized));
        assert_eq!(tracker.set(true), None);
        assert_eq!(tracker.set(false), Some(Event::Restored));
        assert_eq!(tracker.set(false), None);
    }
}
