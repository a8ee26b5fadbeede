//! Pounce engine crate.
//!
//! Owns the platform + GPU runtime pieces the simulation is presented through:
//! a winit window, a wgpu device, a 2D draw stream and its renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
