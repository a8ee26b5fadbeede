//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers, atlases).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod ctx;
pub mod shapes;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::{shape::ShapeRenderer, text::TextRenderer};
