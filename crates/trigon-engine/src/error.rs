use std::fmt;

/// Startup failure. Each variant aborts the startup sequence at the phase that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// No presentable surface could be obtained from the host window.
    SurfaceUnavailable(String),
    /// The platform reported no GPU adapter.
    UnsupportedPlatform,
    /// An adapter was found but the logical device request failed.
    DeviceCreationFailed(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable(reason) => write!(f, "surface unavailable: {reason}"),
            Self::UnsupportedPlatform => f.write_str("no GPU adapter available on this platform"),
            Self::DeviceCreationFailed(reason) => write!(f, "failed to get GPU device: {reason}"),
        }
    }
}

impl std::error::Error for InitError {}

/// Per-frame failure. The frame is dropped; the renderer stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The surface's current texture could not be acquired.
    Surface(wgpu::SurfaceError),
    /// The frame's command encoder could not be opened.
    CommandEncodingFailed(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "failed to acquire surface texture: {err}"),
            Self::CommandEncodingFailed(reason) => {
                write!(f, "failed to create command encoder: {reason}")
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::CommandEncodingFailed(_) => None,
        }
    }
}
