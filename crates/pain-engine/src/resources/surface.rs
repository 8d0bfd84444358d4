use std::rc::Rc;

use image::RgbaImage;

/// Shared handle to a decoded surface. Clones point at the same pixels.
pub type SurfaceHandle = Rc<Surface>;

/// Decoded image in RGBA8, row-major, top-left origin.
#[derive(Debug)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw pixel bytes, 4 per pixel.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}
