use winit::dpi::PhysicalSize;

/// Outcome of presenting one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentStatus {
    Presented,
    /// Surface was lost or outdated and has been reconfigured; nothing shown.
    Reconfigured,
    /// Transient failure; the frame was dropped.
    Skipped,
    /// Unrecoverable (commonly out of memory); the loop should stop.
    Fatal,
}

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];

    if prefer_srgb {
        if let Some(f) = srgb.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(crate) fn status_for_error(err: &wgpu::SurfaceError, size: PhysicalSize<u32>) -> PresentStatus {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated if is_drawable(size) => {
            PresentStatus::Reconfigured
        }
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => PresentStatus::Skipped,
        wgpu::SurfaceError::OutOfMemory => PresentStatus::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => PresentStatus::Skipped,
    }
}

/// wgpu refuses to configure a zero-area surface.
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn prefers_srgb_when_offered() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(choose_surface_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn lost_surface_is_reconfigured_only_when_drawable() {
        let lost = wgpu::SurfaceError::Lost;
        assert_eq!(status_for_error(&lost, PhysicalSize::new(640, 480)), PresentStatus::Reconfigured);
        assert_eq!(status_for_error(&lost, PhysicalSize::new(0, 480)), PresentStatus::Skipped);
    }

    #[test]
    fn out_of_memory_is_fatal() {
        let oom = wgpu::SurfaceError::OutOfMemory;
        assert_eq!(status_for_error(&oom, PhysicalSize::new(1, 1)), PresentStatus::Fatal);
    }
}
