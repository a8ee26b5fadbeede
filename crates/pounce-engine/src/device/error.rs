use std::fmt;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Unrecoverable; the frame loop must stop.
    Fatal,
}

impl SurfaceErrorAction {
    /// Classifies an acquisition error without touching the surface.
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigured,
            wgpu::SurfaceError::Timeout => Self::SkipFrame,
            wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other => Self::Fatal,
        }
    }
}

/// A per-frame failure that ends the frame loop.
#[derive(Debug)]
pub enum FrameError {
    /// The next surface texture could not be acquired.
    Surface(wgpu::SurfaceError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "failed to acquire surface texture: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
        }
    }
}
