use crate::error::LoadError;

use super::surface::Surface;

/// Decodes an image file into a [`Surface`].
///
/// The cache calls this at most once per successful path.
pub trait SurfaceLoader {
    fn load(&mut self, path: &str) -> Result<Surface, LoadError>;
}

/// Loads from the filesystem through the `image` crate; the format is guessed
/// from the file contents and extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageLoader;

impl SurfaceLoader for ImageLoader {
    fn load(&mut self, path: &str) -> Result<Surface, LoadError> {
        let decoded = image::open(path).map_err(|source| LoadError::Decode {
            path: path.to_string(),
            source,
        })?;
        Ok(Surface::new(decoded.to_rgba8()))
    }
}
