use crate::device::ContextConfig;
use crate::window::WindowConfig;

/// Everything needed to bring an application up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub graphics: ContextConfig,
    /// Frame-rate cap; `None` runs as fast as presentation allows.
    pub max_fps: Option<u32>,
}

impl AppConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig {
                title: title.into(),
                ..WindowConfig::default()
            },
            ..Self::default()
        }
    }

    /// Initial inner size in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.window.resizable = resizable;
        self
    }

    pub fn max_fps(mut self, max_fps: Option<u32>) -> Self {
        self.max_fps = max_fps;
        self
    }

    pub fn clear_color(mut self, color: wgpu::Color) -> Self {
        self.graphics.clear_color = color;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            graphics: ContextConfig::default(),
            max_fps: Some(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_window_fields() {
        let config = AppConfig::new("sandbox").size(800, 600).resizable(false).max_fps(None);
        assert_eq!(config.window.title, "sandbox");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!(!config.window.resizable);
        assert_eq!(config.max_fps, None);
    }

    #[test]
    fn defaults_cap_at_sixty_fps() {
        assert_eq!(AppConfig::default().max_fps, Some(60));
    }
}
