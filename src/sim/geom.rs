//! Geometric primitives for the simulation
//!
//! Free quantities (displacement, velocity, acceleration) are `glam::Vec2`.
//! Absolute positions are [`Point2`], a deliberately separate type: a point
//! and a vector both store two floats but mean different things, so keeping
//! them apart makes point + point arithmetic a compile error instead of a
//! silent bug.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An absolute world-space location.
///
/// `Point2 - Point2` yields a `Vec2`; `Point2 ± Vec2` yields another
/// `Point2`. There is no point + point operation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Point2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, rhs: Vec2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Point2 {
    type Output = Point2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign<Vec2> for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vec2> for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// An axis-aligned size, always non-negative.
///
/// A rectangle at `position` with extent `(w, h)` spans
/// `[x, x + w] × [y, y + h]` (+Y up, lower-left anchor).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent2 {
    pub width: f32,
    pub height: f32,
}

impl Extent2 {
    /// Dimensions must be non-negative.
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_a_vector() {
        let a = Point2::new(3.0, 5.0);
        let b = Point2::new(1.0, 2.0);
        assert_eq!(a - b, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn point_translates_by_vector() {
        let mut p = Point2::new(1.0, 1.0);
        assert_eq!(p + Vec2::new(2.0, -1.0), Point2::new(3.0, 0.0));
        p += Vec2::new(-1.0, 4.0);
        assert_eq!(p, Point2::new(0.0, 5.0));
        p -= Vec2::new(0.0, 5.0);
        assert_eq!(p, Point2::new(0.0, 0.0));
    }
}
