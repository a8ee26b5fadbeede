use pounce_engine::paint::Color;
use pounce_engine::scene::{DrawList, ZIndex};
use pounce_engine::text::FontId;

use super::{draw_cat, draw_hud, CatPalette};
use crate::sim::{SimConfig, SimState};

/// Window clear color.
pub fn background() -> Color {
    Color::rgb(230, 240, 255)
}

pub fn target_color() -> Color {
    Color::rgb(30, 144, 255)
}

/// Rebuilds `dl` for one frame: target, cat, then the text overlay.
///
/// The overlay is skipped when no HUD font is available. The background is not
/// part of the list; it is the surface clear color.
pub fn compose_frame(
    dl: &mut DrawList,
    state: &SimState,
    config: &SimConfig,
    hud_font: Option<FontId>,
    palette: &CatPalette,
) {
    dl.clear();

    dl.push_circle(ZIndex::BASE, state.target.position, config.target_radius, target_color());

    let heading = state.pursuer.heading_to(state.target.position);
    draw_cat(dl, ZIndex::BASE, state.pursuer.position, heading, config.pursuer_size, palette);

    if let Some(font) = hud_font {
        draw_hud(dl, ZIndex::OVERLAY, font, state, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pounce_engine::coords::Vec2;
    use pounce_engine::scene::DrawCmd;

    fn state() -> (SimState, SimConfig) {
        let config = SimConfig::default();
        let mut s = SimState::new(&config);
        s.target.position = Vec2::new(600.0, 300.0);
        (s, config)
    }

    #[test]
    fn target_is_painted_first_and_text_last() {
        let (s, config) = state();
        let mut dl = DrawList::new();
        compose_frame(&mut dl, &s, &config, Some(FontId::from_index(0)), &CatPalette::default());

        let items: Vec<_> = dl.iter_in_paint_order().map(|i| i.cmd.clone()).collect();
        let DrawCmd::Ellipse(ball) = &items[0] else { panic!("target not first") };
        assert_eq!(ball.center, Vec2::new(600.0, 300.0));
        assert_eq!(ball.radii, Vec2::new(12.0, 12.0));
        assert_eq!(ball.color, target_color());

        assert_eq!(items.len(), 1 + 9 + 2);
        assert!(items[10..].iter().all(|c| matches!(c, DrawCmd::Text(_))));
        assert!(items[..10].iter().all(|c| !matches!(c, DrawCmd::Text(_))));
    }

    #[test]
    fn no_font_means_no_text() {
        let (s, config) = state();
        let mut dl = DrawList::new();
        compose_frame(&mut dl, &s, &config, None, &CatPalette::default());
        assert_eq!(dl.len(), 10);
    }

    #[test]
    fn compose_replaces_previous_frame() {
        let (s, config) = state();
        let mut dl = DrawList::new();
        compose_frame(&mut dl, &s, &config, None, &CatPalette::default());
        compose_frame(&mut dl, &s, &config, None, &CatPalette::default());
        assert_eq!(dl.len(), 10);
    }

    #[test]
    fn cat_faces_the_target() {
        let (mut s, config) = state();
        s.target.position = Vec2::new(200.0, 300.0);
        let mut dl = DrawList::new();
        compose_frame(&mut dl, &s, &config, None, &CatPalette::default());

        // Head sits between body and target.
        let DrawCmd::Ellipse(head) = &dl.items()[2].cmd else { panic!("head missing") };
        assert!(head.center.x < s.pursuer.position.x);
    }
}
