use crate::error::InitError;

/// Initial window parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl WindowConfig {
    /// Largest side accepted for the initial window.
    pub const MAX_SIDE: u32 = 16_384;

    /// Rejects parameters no platform can honor.
    pub fn validate(&self) -> Result<(), InitError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(InitError::InvalidConfig(format!("{name} must be non-zero")));
            }
            if value > Self::MAX_SIDE {
                return Err(InitError::InvalidConfig(format!(
                    "{name} {value} exceeds {}",
                    Self::MAX_SIDE
                )));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pain".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}
