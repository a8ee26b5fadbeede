//! Steering controller and position integration.
//!
//! Seek behavior with a bounded per-tick correction: the pursuer wants to move
//! straight at the target at full speed, but may only change its velocity by
//! `acceleration * dt` per tick. Damping is applied every tick afterwards.

use pounce_engine::coords::Vec2;

use super::{PursuerState, SimConfig};

/// Velocity the pursuer would like to have: full speed toward `target`.
///
/// Zero when the target is within `NORMALIZE_EPSILON` of `position`.
#[inline]
pub fn desired_velocity(position: Vec2, target: Vec2, config: &SimConfig) -> Vec2 {
    (target - position).normalized() * config.max_speed
}

/// The bounded correction added to `velocity` this tick.
///
/// Its length never exceeds `acceleration * dt`.
pub fn steering_force(
    velocity: Vec2,
    position: Vec2,
    target: Vec2,
    dt: f32,
    config: &SimConfig,
) -> Vec2 {
    let limit = (config.acceleration * dt).max(0.0);
    (desired_velocity(position, target, config) - velocity).clamped_to_length(limit)
}

/// Next velocity: steer, damp, then cap at `max_speed`.
pub fn steer(velocity: Vec2, position: Vec2, target: Vec2, dt: f32, config: &SimConfig) -> Vec2 {
    let steered = velocity + steering_force(velocity, position, target, dt, config);
    (steered * config.friction).clamped_to_length(config.max_speed)
}

#[inline]
pub fn integrate(position: Vec2, velocity: Vec2, dt: f32) -> Vec2 {
    position + velocity * dt
}

/// Steers and moves the pursuer one tick toward `target`.
pub fn update_pursuer(pursuer: &mut PursuerState, target: Vec2, dt: f32, config: &SimConfig) {
    pursuer.velocity = steer(pursuer.velocity, pursuer.position, target, dt, config);
    pursuer.position = integrate(pursuer.position, pursuer.velocity, dt);
}
