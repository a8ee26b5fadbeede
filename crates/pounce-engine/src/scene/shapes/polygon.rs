use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex polygon payload. Points may wind either way.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DrawList {
    /// Records a filled convex polygon. Fewer than three points draw nothing.
    pub fn push_polygon(&mut self, z: ZIndex, points: impl Into<Vec<Vec2>>, color: Color) {
        self.push(z, DrawCmd::Polygon(PolygonCmd { points: points.into(), color }));
    }
}
