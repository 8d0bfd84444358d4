//! Events drained from the platform once per frame.

use crate::input::InputEvent;

/// One native event, already translated out of the windowing library.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user or the platform asked the application to close.
    Quit,

    /// The window stopped being visible; updates and presentation pause.
    Minimized,

    /// The window became visible again after [`Event::Minimized`].
    Restored,

    /// New drawable size in physical pixels. Never zero.
    Resized { width: u32, height: u32 },

    FocusChanged(bool),

    Input(InputEvent),
}

impl Event {
    pub fn as_input(&self) -> Option<&InputEvent> {
        match self {
            Event::Input(input) => Some(input),
            _ => None,
        }
    }
}
