//! Platform-agnostic input vocabulary.
//!
//! The window backend translates native events into these types; nothing here
//! depends on winit.

mod types;

pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
};
