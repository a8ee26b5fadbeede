//! Presentation: turns a `SimState` into a `DrawList`.
//!
//! Pure CPU code; nothing here touches the GPU.

pub mod cat;
pub mod hud;
pub mod scene;

pub use cat::{draw_cat, CatPalette};
pub use hud::draw_hud;
pub use scene::{background, compose_frame, target_color};
