//! Application lifecycle and the main loop.
//!
//! The application owns the platform backend, the layer stack and the
//! resource cache, and drives them through one fixed sequence per frame:
//! poll events → dispatch top-down → update bottom-up → present.

mod app;
mod config;

pub use app::{AppState, Application};
pub use config::AppConfig;
