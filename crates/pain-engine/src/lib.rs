//! Pain engine crate.
//!
//! Owns the window and graphics-context lifecycle, the fixed frame loop and the
//! ordered layer stack that user code plugs into.

pub mod core;
pub mod device;
pub mod entry;
pub mod error;
pub mod event;
pub mod input;
pub mod layer;
pub mod logging;
pub mod resources;
pub mod time;
pub mod window;

#[cfg(test)]
mod testing;

pub use crate::core::{AppConfig, AppState, Application};
pub use entry::{launch, run_application};
pub use error::{InitError, LoadError};
pub use event::Event;
pub use layer::{Layer, LayerId, LayerStack, Propagation, UpdateCtx};
pub use resources::{ResourceCache, Surface, SurfaceHandle, SurfaceLoader};
