use crate::scene::shapes::{EllipseCmd, LineCmd, PolygonCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` (geometry) or a dedicated renderer to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Ellipse(EllipseCmd),
    Polygon(PolygonCmd),
    Line(LineCmd),
    Text(TextCmd),
}
