//! Graphics context.
//!
//! Wraps the wgpu instance, device and window surface. The core only asks it
//! to present a cleared frame; drawing belongs to higher layers.

mod config;
mod context;
mod surface;

pub use config::ContextConfig;
pub use context::GraphicsContext;
pub use surface::PresentStatus;
