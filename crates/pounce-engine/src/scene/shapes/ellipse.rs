use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled ellipse payload.
///
/// `radii.x` runs along the local X axis, which is rotated by `rotation`
/// radians around `center`. A circle is an ellipse with equal radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub rotation: f32,
    pub color: Color,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2, rotation: f32, color: Color) -> Self {
        Self { center, radii, rotation, color }
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        self.radii.x == self.radii.y
    }
}

impl DrawList {
    /// Records a filled ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(center, radii, rotation, color)));
    }

    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_ellipse(z, center, Vec2::new(radius, radius), 0.0, color);
    }
}
