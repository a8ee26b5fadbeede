use pounce_engine::coords::Vec2;
use pounce_engine::paint::Color;
use pounce_engine::scene::{DrawList, ZIndex};
use pounce_engine::text::FontId;

use crate::sim::{SimConfig, SimState};

pub const HUD_FONT_SIZE: f32 = 24.0;

pub const INSTRUCTIONS: &str = "Move your mouse inside the window";
pub const CAUGHT_LABEL: &str = "Caught";

/// Speed/distance line, whole pixels truncated toward zero.
pub fn readout(state: &SimState) -> String {
    format!(
        "Cat speed: {} px/s   Distance: {} px",
        state.pursuer.speed() as i32,
        state.separation() as i32
    )
}

/// Records the text overlay: instructions, live readout, and the caught banner
/// while the countdown runs.
pub fn draw_hud(dl: &mut DrawList, z: ZIndex, font: FontId, state: &SimState, config: &SimConfig) {
    dl.push_text(
        z,
        INSTRUCTIONS,
        font,
        HUD_FONT_SIZE,
        Color::rgb(20, 20, 20),
        Vec2::new(14.0, 10.0),
    );
    dl.push_text(
        z,
        readout(state),
        font,
        HUD_FONT_SIZE,
        Color::rgb(30, 30, 30),
        Vec2::new(14.0, 36.0),
    );

    if state.caught.is_active() {
        dl.push_text(
            z,
            CAUGHT_LABEL,
            font,
            HUD_FONT_SIZE,
            Color::rgb(200, 30, 30),
            Vec2::new((config.width / 2.0).floor() - 20.0, 20.0),
        );
    }
}
