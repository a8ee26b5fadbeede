use pounce_engine::coords::{Rect, Vec2};

/// Simulation constants.
///
/// Distances are logical pixels, speeds px/s, accelerations px/s², durations seconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    /// Frame-rate cap of the interactive loop.
    pub fps: f32,

    pub max_speed: f32,
    /// Bound on the per-second steering correction.
    pub acceleration: f32,
    /// Velocity multiplier applied once per tick.
    pub friction: f32,
    pub catch_distance: f32,

    /// How long the "Caught" overlay stays up.
    pub caught_duration: f32,
    /// Per-axis distance the target jumps away on a catch.
    pub flee_offset: f32,
    /// Inset of the teleport rectangle from each window edge.
    pub teleport_padding: f32,

    pub target_radius: f32,
    pub pursuer_size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fps: 60.0,
            max_speed: 200.0,
            acceleration: 600.0,
            friction: 0.90,
            catch_distance: 30.0,
            caught_duration: 0.9,
            flee_offset: 40.0,
            teleport_padding: 50.0,
            target_radius: 12.0,
            pursuer_size: 64.0,
        }
    }
}

impl SimConfig {
    /// The window area, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Where a teleported target may land.
    #[inline]
    pub fn teleport_area(&self) -> Rect {
        self.bounds().inset(self.teleport_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_800_by_600() {
        let c = SimConfig::default();
        assert_eq!(c.center(), Vec2::new(400.0, 300.0));
        assert_eq!(c.bounds().max(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn teleport_area_is_padded() {
        let area = SimConfig::default().teleport_area();
        assert_eq!(area.min(), Vec2::new(50.0, 50.0));
        assert_eq!(area.max(), Vec2::new(750.0, 550.0));
    }
}
