use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// Lengths below this are treated as zero by [`Vec2::normalized`].
pub const NORMALIZE_EPSILON: f32 = 0.001;

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along `angle` (radians, +Y down).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn scale(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Direction of the vector in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns the zero vector when the length is below [`NORMALIZE_EPSILON`].
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            Vec2::zero()
        } else {
            self / len
        }
    }

    /// Rescales to `max` when longer than `max`; direction is preserved.
    #[inline]
    pub fn clamped_to_length(self, max: f32) -> Vec2 {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }

    /// Rotates counter-clockwise in +Y-up terms (clockwise on screen).
    #[inline]
    pub fn rotated(self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    // ── length / normalized ───────────────────────────────────────────────

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(10.0, -7.5).normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalized_near_zero_is_zero() {
        let n = Vec2::new(0.0004, -0.0005).normalized();
        assert_eq!(n, Vec2::zero());
        assert!(n.is_finite());
    }

    #[test]
    fn normalized_exact_zero_is_zero() {
        assert_eq!(Vec2::zero().normalized(), Vec2::zero());
    }

    // ── clamped_to_length ─────────────────────────────────────────────────

    #[test]
    fn clamp_shorter_is_identity() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.clamped_to_length(10.0), v);
    }

    #[test]
    fn clamp_longer_preserves_direction() {
        let v = Vec2::new(30.0, 40.0).clamped_to_length(5.0);
        assert_relative_eq!(v.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn clamp_to_zero_collapses() {
        assert_eq!(Vec2::new(3.0, 4.0).clamped_to_length(0.0), Vec2::zero());
    }

    // ── rotated / angle ───────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn from_angle_round_trips_through_angle() {
        let a = 2.1;
        assert_relative_eq!(Vec2::from_angle(a).angle(), a, epsilon = 1e-6);
    }

    // ── operators ─────────────────────────────────────────────────────────

    #[test]
    fn add_sub_scale() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a.scale(2.0), a * 2.0);
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(2.0, 3.0);
        v *= 0.5;
        assert_eq!(v, Vec2::new(1.5, 2.0));
    }
}
