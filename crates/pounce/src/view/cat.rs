//! Procedural cat.
//!
//! All proportions are fractions of `size`, the body height in pixels.

use pounce_engine::coords::Vec2;
use pounce_engine::paint::Color;
use pounce_engine::scene::{DrawList, ZIndex};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatPalette {
    pub fur: Color,
    pub eye: Color,
    pub pupil: Color,
}

impl Default for CatPalette {
    fn default() -> Self {
        Self {
            fur: Color::rgb(255, 165, 0),
            eye: Color::rgb(255, 255, 255),
            pupil: Color::rgb(0, 0, 0),
        }
    }
}

const EYE_TILT: f32 = 20.0 * std::f32::consts::PI / 180.0;

/// Records a cat at `pos` facing `heading` (radians, +Y down).
///
/// Paint order: body, head, ears, eyes, pupils, tail.
pub fn draw_cat(
    dl: &mut DrawList,
    z: ZIndex,
    pos: Vec2,
    heading: f32,
    size: f32,
    palette: &CatPalette,
) {
    let facing = Vec2::from_angle(heading);

    dl.push_ellipse(z, pos, Vec2::new(size * 0.6, size * 0.5), heading, palette.fur);

    let head = pos + facing * (size * 0.6);
    dl.push_circle(z, head, size * 0.45, palette.fur);

    // Ears stay upright whatever the heading.
    for side in [-1.0, 1.0] {
        dl.push_polygon(
            z,
            vec![
                head + Vec2::new(side * size * 0.25, -size * 0.30),
                head + Vec2::new(side * size * 0.05, -size * 0.60),
                head + Vec2::new(-side * size * 0.10, -size * 0.20),
            ],
            palette.fur,
        );
    }

    let eye_offset = Vec2::from_angle(heading + 0.15) * (size * 0.15);
    let sep = size * 0.10;
    let eyes = [
        head + eye_offset.rotated(EYE_TILT) + Vec2::new(-sep, 0.0),
        head + eye_offset.rotated(-EYE_TILT) + Vec2::new(sep, 0.0),
    ];
    for eye in eyes {
        dl.push_circle(z, eye, size * 0.08, palette.eye);
    }

    let look = facing * (size * 0.03);
    for eye in eyes {
        dl.push_circle(z, eye + look, size * 0.04, palette.pupil);
    }

    let tail_start = pos + Vec2::new(-size * 0.5, size * 0.05);
    let tail_end = tail_start + Vec2::from_angle(heading - 1.4) * (size * 0.9);
    dl.push_line(z, tail_start, tail_end, (size * 0.09).floor().max(2.0), palette.fur);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pounce_engine::scene::DrawCmd;

    fn cat(heading: f32) -> DrawList {
        let mut dl = DrawList::new();
        draw_cat(&mut dl, ZIndex::BASE, Vec2::new(400.0, 300.0), heading, 64.0, &CatPalette::default());
        dl
    }

    #[test]
    fn cat_is_nine_primitives_in_paint_order() {
        let mut dl = cat(0.0);
        let kinds: Vec<&str> = dl
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Ellipse(e) if e.is_circle() => "circle",
                DrawCmd::Ellipse(_) => "ellipse",
                DrawCmd::Polygon(_) => "polygon",
                DrawCmd::Line(_) => "line",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "ellipse", "circle", "polygon", "polygon", "circle", "circle", "circle", "circle",
                "line"
            ]
        );
    }

    #[test]
    fn head_leads_along_heading() {
        let dl = cat(std::f32::consts::FRAC_PI_2);
        let DrawCmd::Ellipse(head) = &dl.items()[1].cmd else { panic!("head missing") };
        assert_relative_eq!(head.center.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(head.center.y, 300.0 + 64.0 * 0.6, epsilon = 1e-3);
        assert_relative_eq!(head.radii.x, 64.0 * 0.45);
    }

    #[test]
    fn body_is_oriented_along_heading() {
        let dl = cat(1.0);
        let DrawCmd::Ellipse(body) = &dl.items()[0].cmd else { panic!("body missing") };
        assert_eq!(body.rotation, 1.0);
        assert_relative_eq!(body.radii.x, 64.0 * 0.6);
        assert_relative_eq!(body.radii.y, 64.0 * 0.5);
    }

    #[test]
    fn tail_width_has_a_floor() {
        let mut dl = DrawList::new();
        draw_cat(&mut dl, ZIndex::BASE, Vec2::zero(), 0.0, 10.0, &CatPalette::default());
        let Some(DrawCmd::Line(tail)) = dl.items().last().map(|i| &i.cmd) else {
            panic!("tail missing")
        };
        assert_eq!(tail.width, 2.0);

        let dl = cat(0.0);
        let Some(DrawCmd::Line(tail)) = dl.items().last().map(|i| &i.cmd) else {
            panic!("tail missing")
        };
        assert_eq!(tail.width, 5.0);
        assert_relative_eq!(tail.from.x, 400.0 - 32.0);
        assert_relative_eq!(tail.from.distance(tail.to), 64.0 * 0.9, epsilon = 1e-3);
    }

    #[test]
    fn pupils_sit_inside_eyes() {
        let dl = cat(0.3);
        let circles: Vec<_> = dl
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Ellipse(e) if e.is_circle() => Some(e.clone()),
                _ => None,
            })
            .collect();
        // head, left eye, right eye, left pupil, right pupil
        let (eyes, pupils) = (&circles[1..3], &circles[3..5]);
        for (eye, pupil) in eyes.iter().zip(pupils) {
            assert!(eye.center.distance(pupil.center) + pupil.radii.x <= eye.radii.x + 1e-3);
        }
    }
}
