pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod text;

pub use ellipse::EllipseCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;
pub use text::TextCmd;
