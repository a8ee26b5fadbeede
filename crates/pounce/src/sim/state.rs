use pounce_engine::coords::Vec2;

use super::SimConfig;

/// The chasing entity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PursuerState {
    pub position: Vec2,
    /// px/s; never longer than `max_speed` after an update.
    pub velocity: Vec2,
}

impl PursuerState {
    pub fn at_rest(position: Vec2) -> Self {
        Self { position, velocity: Vec2::zero() }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Direction from the pursuer to `target`, in radians. Zero when they coincide.
    #[inline]
    pub fn heading_to(&self, target: Vec2) -> f32 {
        (target - self.position).angle()
    }
}

/// The point being chased.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetState {
    pub position: Vec2,
}

/// Countdown behind the "Caught" overlay.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CaughtStatus {
    active: bool,
    remaining: f32,
}

impl CaughtStatus {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left; zero or negative once expired.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Starts the countdown unless one is already running.
    ///
    /// Returns `true` when this call started it.
    pub fn trigger(&mut self, duration: f32) -> bool {
        if self.remaining > 0.0 {
            return false;
        }
        self.active = true;
        self.remaining = duration;
        true
    }

    /// Counts an active status down by `dt`; expires it at or below zero.
    pub fn decay(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
        }
    }
}

/// Everything the simulation mutates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimState {
    pub pursuer: PursuerState,
    pub target: TargetState,
    pub caught: CaughtStatus,
}

impl SimState {
    /// Pursuer at rest in the window center, target at the origin until the pointer
    /// is first seen.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pursuer: PursuerState::at_rest(config.center()),
            target: TargetState { position: Vec2::zero() },
            caught: CaughtStatus::default(),
        }
    }

    /// Distance between pursuer and target.
    #[inline]
    pub fn separation(&self) -> f32 {
        self.pursuer.position.distance(self.target.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_state_starts_centered_and_still() {
        let s = SimState::new(&SimConfig::default());
        assert_eq!(s.pursuer.position, Vec2::new(400.0, 300.0));
        assert_eq!(s.pursuer.speed(), 0.0);
        assert!(!s.caught.is_active());
    }

    #[test]
    fn heading_points_at_target() {
        let p = PursuerState::at_rest(Vec2::new(0.0, 0.0));
        assert_relative_eq!(p.heading_to(Vec2::new(0.0, 5.0)), std::f32::consts::FRAC_PI_2);
        assert_eq!(p.heading_to(Vec2::zero()), 0.0);
    }

    // ── caught status ─────────────────────────────────────────────────────

    #[test]
    fn trigger_from_inactive_starts_countdown() {
        let mut c = CaughtStatus::default();
        assert!(c.trigger(0.9));
        assert!(c.is_active());
        assert_eq!(c.remaining(), 0.9);
    }

    #[test]
    fn trigger_while_running_does_not_rearm() {
        let mut c = CaughtStatus::default();
        c.trigger(0.9);
        c.decay(0.5);
        assert!(!c.trigger(0.9));
        assert_relative_eq!(c.remaining(), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn decay_expires_at_zero() {
        let mut c = CaughtStatus::default();
        c.trigger(0.5);
        c.decay(0.25);
        assert!(c.is_active());
        c.decay(0.25);
        assert!(!c.is_active());

        // Expired statuses stay put.
        let r = c.remaining();
        c.decay(1.0);
        assert_eq!(c.remaining(), r);
    }

    #[test]
    fn expired_status_can_retrigger() {
        let mut c = CaughtStatus::default();
        c.trigger(0.1);
        c.decay(0.2);
        assert!(c.trigger(0.9));
        assert_eq!(c.remaining(), 0.9);
    }
}
