use std::collections::HashMap;
use std::rc::Rc;

use crate::error::LoadError;

use super::loader::{ImageLoader, SurfaceLoader};
use super::surface::SurfaceHandle;

/// Path-keyed store of decoded surfaces.
///
/// Keys are the path strings exactly as given: `"a.png"` and `"./a.png"` are
/// distinct entries. A failed load is reported to the caller and not
/// remembered, so the next request for the same path tries again.
pub struct ResourceCache {
    loader: Box<dyn SurfaceLoader>,
    surfaces: HashMap<String, SurfaceHandle>,
    decodes: usize,
}

impl ResourceCache {
    /// Cache backed by [`ImageLoader`]. Nothing is allocated until the first
    /// successful load.
    pub fn new() -> Self {
        Self::with_loader(ImageLoader)
    }

    pub fn with_loader(loader: impl SurfaceLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            surfaces: HashMap::new(),
            decodes: 0,
        }
    }

    /// Returns the surface for `path`, decoding it on first request.
    pub fn get_surface(&mut self, path: &str) -> Result<SurfaceHandle, LoadError> {
        if path.is_empty() {
            return Err(LoadError::EmptyPath);
        }

        if let Some(surface) = self.surfaces.get(path) {
            return Ok(Rc::clone(surface));
        }

        self.decodes += 1;
        let surface = match self.loader.load(path) {
            Ok(surface) => Rc::new(surface),
            Err(err) => {
                log::warn!("surface load failed: {}", crate::error::report(&err));
                return Err(err);
            }
        };

        log::debug!(
            "loaded surface `{path}` ({}x{})",
            surface.width(),
            surface.height()
        );
        self.surfaces.insert(path.to_string(), Rc::clone(&surface));
        Ok(surface)
    }

    /// Cached surface for `path`, without loading.
    pub fn peek(&self, path: &str) -> Option<SurfaceHandle> {
        self.surfaces.get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.surfaces.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Number of loader invocations so far, failed ones included.
    pub fn decode_count(&self) -> usize {
        self.decodes
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}
