//! Window, event source and presentation.
//!
//! The application talks to the platform only through [`Backend`]. The default
//! implementation, [`WinitBackend`], owns the winit event loop, one window and
//! the graphics context bound to it.

mod backend;
mod config;
mod minimize;
mod translate;
mod winit_backend;

pub use backend::Backend;
pub use config::WindowConfig;
pub use winit_backend::WinitBackend;
