use super::{Rect, Vec2};

/// Viewport size in logical pixels.
///
/// Renderers should treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The viewport as a rect anchored at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), Vec2::new(self.width, self.height))
    }
}
