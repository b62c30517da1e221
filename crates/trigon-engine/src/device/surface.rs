use winit::dpi::PhysicalSize;

/// Alpha compositing mode requested for the presentation surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlphaMode {
    /// The compositor ignores the surface's alpha channel.
    Opaque,
    /// The compositor blends using premultiplied surface alpha.
    Premultiplied,
}

impl AlphaMode {
    pub fn to_wgpu(self) -> wgpu::CompositeAlphaMode {
        match self {
            Self::Opaque => wgpu::CompositeAlphaMode::Opaque,
            Self::Premultiplied => wgpu::CompositeAlphaMode::PreMultiplied,
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Picks the presentation format.
///
/// The first reported format is the platform's preferred one. With `prefer_srgb`, an sRGB
/// 8-bit format wins when the surface offers it.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: AlphaMode,
) -> wgpu::CompositeAlphaMode {
    let wanted = requested.to_wgpu();
    if supported.contains(&wanted) {
        return wanted;
    }

    let fallback = supported
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);
    log::warn!("alpha mode {wanted:?} not supported by surface; using {fallback:?}");
    fallback
}

/// Maps a surface acquisition error to the action the frame loop should take.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// Whether a surface of `size` can be configured. wgpu rejects zero-sized configurations,
/// which is what a minimized window reports.
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}
