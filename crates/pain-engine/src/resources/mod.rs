//! Image resource cache.
//!
//! Surfaces are decoded once per path and shared afterwards. The cache is owned
//! by the application and lent to layers; it is not thread-safe and never
//! evicts.

mod cache;
mod loader;
mod surface;

pub use cache::ResourceCache;
pub use loader::{ImageLoader, SurfaceLoader};
pub use surface::{Surface, SurfaceHandle};
