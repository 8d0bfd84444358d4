/// Graphics context parameters.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Prefer an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is supported everywhere and paces the loop to vsync.
    pub present_mode: wgpu::PresentMode,

    pub required_limits: wgpu::Limits,

    /// Hint only; honored depending on platform and backend.
    pub desired_maximum_frame_latency: u32,

    /// Color every frame is cleared to before presentation.
    pub clear_color: wgpu::Color,

    /// Panic on validation or internal errors reported by the device.
    ///
    /// On by default in debug builds. When off, those errors are only logged.
    pub fatal_diagnostics: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            fatal_diagnostics: cfg!(debug_assertions),
        }
    }
}
