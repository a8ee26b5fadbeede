//! Target acquisition: pointer tracking, teleport and flee nudge.

use pounce_engine::coords::Vec2;

use super::{RandomSource, SimConfig, TargetState};

/// Binds the target to the pointer, clamped into the window.
///
/// Without a pointer sample the target keeps its current position.
pub fn acquire(target: &mut TargetState, pointer: Option<Vec2>, config: &SimConfig) {
    if let Some(p) = pointer {
        target.position = config.bounds().clamp_point(p);
    }
}

/// Moves the target to a uniformly random point of the padded window interior.
pub fn teleport<R>(target: &mut TargetState, rng: &mut R, config: &SimConfig) -> Vec2
where
    R: RandomSource + ?Sized,
{
    let area = config.teleport_area();
    let (min, max) = (area.min(), area.max());
    target.position = Vec2::new(rng.uniform(min.x, max.x), rng.uniform(min.y, max.y));
    log::debug!("target teleported to ({:.1}, {:.1})", target.position.x, target.position.y);
    target.position
}

/// Jumps the target `flee_offset` along each axis, signs drawn independently.
///
/// The result is not clamped; the next pointer sample pulls it back in.
pub fn flee_nudge<R>(target: &mut TargetState, rng: &mut R, config: &SimConfig)
where
    R: RandomSource + ?Sized,
{
    let dx = rng.sign();
    let dy = rng.sign();
    target.position += Vec2::new(dx, dy) * config.flee_offset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::Scripted;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn target_at(x: f32, y: f32) -> TargetState {
        TargetState { position: Vec2::new(x, y) }
    }

    // ── acquire ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_inside_window_is_taken_verbatim() {
        let mut t = target_at(0.0, 0.0);
        acquire(&mut t, Some(Vec2::new(123.5, 456.25)), &SimConfig::default());
        assert_eq!(t.position, Vec2::new(123.5, 456.25));
    }

    #[test]
    fn pointer_outside_window_is_clamped() {
        let c = SimConfig::default();
        let mut t = target_at(0.0, 0.0);
        acquire(&mut t, Some(Vec2::new(-30.0, 900.0)), &c);
        assert_eq!(t.position, Vec2::new(0.0, 600.0));
        acquire(&mut t, Some(Vec2::new(812.0, -1.0)), &c);
        assert_eq!(t.position, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn missing_pointer_keeps_target() {
        let mut t = target_at(70.0, 80.0);
        acquire(&mut t, None, &SimConfig::default());
        assert_eq!(t.position, Vec2::new(70.0, 80.0));
    }

    // ── teleport ──────────────────────────────────────────────────────────

    #[test]
    fn teleport_lands_inside_padded_area() {
        let c = SimConfig::default();
        let area = c.teleport_area();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut t = target_at(0.0, 0.0);
        for _ in 0..500 {
            let p = teleport(&mut t, &mut rng, &c);
            assert!(area.contains_inclusive(p), "{p:?} outside {area:?}");
            assert_eq!(t.position, p);
        }
    }

    #[test]
    fn teleport_spans_the_area() {
        let c = SimConfig::default();
        let mut rng = Scripted::fractions(&[0.0, 1.0]);
        let mut t = target_at(0.0, 0.0);
        assert_eq!(teleport(&mut t, &mut rng, &c), Vec2::new(50.0, 550.0));
    }

    // ── flee ──────────────────────────────────────────────────────────────

    #[test]
    fn flee_moves_forty_on_each_axis() {
        let c = SimConfig::default();
        let mut t = target_at(100.0, 100.0);
        flee_nudge(&mut t, &mut Scripted::coins(&[true, false]), &c);
        assert_eq!(t.position, Vec2::new(140.0, 60.0));
    }

    #[test]
    fn flee_may_leave_the_window() {
        let c = SimConfig::default();
        let mut t = target_at(10.0, 590.0);
        flee_nudge(&mut t, &mut Scripted::coins(&[false, true]), &c);
        assert_eq!(t.position, Vec2::new(-30.0, 630.0));
    }
}
