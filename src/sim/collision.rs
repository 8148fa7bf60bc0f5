//! Swept collision detection and response for axis-aligned rectangles
//!
//! The hard center of the crate: finding, analytically, the earliest time
//! within a single step at which a moving rectangle first touches a
//! stationary one, and the outward normal of the face it touched.
//!
//! The rectangle-vs-rectangle sweep is reduced to a point-vs-rectangle sweep
//! by growing the stationary rectangle by the mover's extent (Minkowski
//! sum); the mover's anchor corner is then traced as a point through the
//! step's displacement.

use glam::Vec2;

use super::geom::{Extent2, Point2};

/// Result of one swept test. Produced fresh per call, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct CollisionInfo {
    /// Outward normal of the face that was hit. Meaningful only when
    /// `collided` is true.
    pub normal: Vec2,
    /// Fraction of the step's motion at which contact occurs, in `[0, 1)`
    /// when `collided` is true; 1.0 otherwise.
    pub time_of_impact: f32,
    /// Whether any face was hit. This flag is authoritative; the other
    /// fields must not be used to infer a hit.
    pub collided: bool,
}

impl CollisionInfo {
    pub fn miss() -> Self {
        Self {
            normal: Vec2::ZERO,
            time_of_impact: 1.0,
            collided: false,
        }
    }
}

/// Sweep a moving rectangle from `old_pos` to `new_pos` against a stationary
/// rectangle, reporting the earliest contact within the step.
///
/// Three faces of the expanded rectangle are candidates: the left face
/// (normal `(-1, 0)`), the right face (normal `(1, 0)`), and the top face
/// (normal `(0, 1)`). The underside is never a contact surface. A face time
/// is accepted on the half-open interval `[0, 1)`, with the cross-axis
/// coordinate at that time strictly inside the expanded rectangle's span;
/// an exact edge graze on the cross axis is a miss. Earliest time wins,
/// ties broken by evaluation order (horizontal faces before the top face).
///
/// A zero displacement on an axis disables that axis's face tests, so there
/// is no division by zero and no spurious hit.
pub fn detect_sweep(
    old_pos: Point2,
    new_pos: Point2,
    mover: Extent2,
    stationary_pos: Point2,
    stationary: Extent2,
) -> CollisionInfo {
    // Minkowski expansion: grow the stationary rectangle by the mover's
    // extent, shifting its near corner down-left, so that the mover's
    // lower-left anchor can be swept as a point.
    let expanded_pos = Point2::new(
        stationary_pos.x - mover.width,
        stationary_pos.y - mover.height,
    );
    let expanded = Extent2::new(
        stationary.width + mover.width,
        stationary.height + mover.height,
    );

    let delta = new_pos - old_pos;

    let mut result = CollisionInfo::miss();
    let mut t_so_far = 1.0_f32;

    if delta.x != 0.0 {
        // Left face. Anchor-vs-left-face is correct here: the expansion
        // already accounts for the mover's width.
        let t = (expanded_pos.x - old_pos.x) / delta.x;
        if t >= 0.0 && t < t_so_far {
            let y = old_pos.y + t * delta.y;
            if y > expanded_pos.y && y < expanded_pos.y + expanded.height {
                t_so_far = t;
                result.normal = Vec2::new(-1.0, 0.0);
                result.collided = true;
            }
        }

        // Right face.
        let t = (expanded_pos.x + expanded.width - old_pos.x) / delta.x;
        if t >= 0.0 && t < t_so_far {
            let y = old_pos.y + t * delta.y;
            if y > expanded_pos.y && y < expanded_pos.y + expanded.height {
                t_so_far = t;
                result.normal = Vec2::new(1.0, 0.0);
                result.collided = true;
            }
        }
    }

    if delta.y != 0.0 {
        // Top face.
        let t = (expanded_pos.y + expanded.height - old_pos.y) / delta.y;
        if t >= 0.0 && t < t_so_far {
            let x = old_pos.x + t * delta.x;
            if x > expanded_pos.x && x < expanded_pos.x + expanded.width {
                t_so_far = t;
                result.normal = Vec2::new(0.0, 1.0);
                result.collided = true;
            }
        }
    }

    result.time_of_impact = t_so_far;

    if result.collided {
        log::trace!(
            "sweep hit: normal=({}, {}) t={:.4}",
            result.normal.x,
            result.normal.y,
            t_so_far
        );
    }

    result
}

/// Remove the velocity component along a contact normal, keeping the
/// tangential part: `v' = v - (v · n) n`.
///
/// A sliding response, not a bounce: a body landing on a surface keeps its
/// horizontal speed.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sweep(
        old: (f32, f32),
        new: (f32, f32),
        mover: (f32, f32),
        block_pos: (f32, f32),
        block: (f32, f32),
    ) -> CollisionInfo {
        detect_sweep(
            Point2::new(old.0, old.1),
            Point2::new(new.0, new.1),
            Extent2::new(mover.0, mover.1),
            Point2::new(block_pos.0, block_pos.1),
            Extent2::new(block.0, block.1),
        )
    }

    #[test]
    fn horizontal_sweep_into_block_hits_left_face() {
        // 2x2 mover from (0,0) to (10,0), 4x4 block at (5,-2). The expanded
        // rectangle spans x in [3,9], y in [-4,2]; the left face is crossed
        // at t = 0.3 with y = 0 inside the span.
        let info = sweep((0.0, 0.0), (10.0, 0.0), (2.0, 2.0), (5.0, -2.0), (4.0, 4.0));
        assert!(info.collided);
        assert_eq!(info.normal, Vec2::new(-1.0, 0.0));
        assert!((info.time_of_impact - 0.3).abs() < 1e-6);
    }

    #[test]
    fn horizontal_sweep_with_no_vertical_overlap_misses() {
        // Same sweep, but the mover passes well above the block: the face
        // line is crossed, the rectangle is not.
        let info = sweep((0.0, 10.0), (10.0, 10.0), (2.0, 2.0), (5.0, -2.0), (4.0, 4.0));
        assert!(!info.collided);
        assert_eq!(info.time_of_impact, 1.0);
    }

    #[test]
    fn earliest_face_wins_on_diagonal_sweep() {
        // Up-right diagonal that crosses both the left face (t = 0.4) and
        // the top face (t = 0.6) of the expanded rectangle; the earlier
        // left-face hit must be reported. Expanded rect: pos (4,0), 6x6.
        let info = sweep((0.0, 0.0), (10.0, 10.0), (2.0, 2.0), (6.0, 2.0), (4.0, 4.0));
        assert!(info.collided);
        assert_eq!(info.normal, Vec2::new(-1.0, 0.0));
        assert!((info.time_of_impact - 0.4).abs() < 1e-6);
    }

    #[test]
    fn falling_sweep_lands_on_top_face() {
        // Down-right diagonal onto a block: the left face's crossing time
        // fails the cross-axis check, the top face is hit at t = 0.6.
        // Expanded rect: pos (2,0), 6x4.
        let info = sweep((0.0, 10.0), (10.0, 0.0), (2.0, 2.0), (4.0, 2.0), (4.0, 2.0));
        assert!(info.collided);
        assert_eq!(info.normal, Vec2::new(0.0, 1.0));
        assert!((info.time_of_impact - 0.6).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_never_collides() {
        // A stationary mover inside the expanded rectangle still reports no
        // hit: both axis tests are disabled.
        let info = sweep((5.0, 0.0), (5.0, 0.0), (2.0, 2.0), (5.0, -2.0), (4.0, 4.0));
        assert!(!info.collided);
        assert_eq!(info.time_of_impact, 1.0);
    }

    #[test]
    fn exact_edge_graze_on_cross_axis_is_a_miss() {
        // Mover whose path's y sits exactly on the expanded rectangle's top
        // edge (y = 2): the strict cross-axis check rejects it.
        let info = sweep((0.0, 2.0), (10.0, 2.0), (2.0, 2.0), (5.0, -2.0), (4.0, 4.0));
        assert!(!info.collided);
    }

    #[test]
    fn reflection_keeps_tangential_component() {
        let v = reflect(Vec2::new(3.0, -4.0), Vec2::new(0.0, 1.0));
        assert_eq!(v, Vec2::new(3.0, 0.0));

        let v = reflect(Vec2::new(-2.0, 7.0), Vec2::new(1.0, 0.0));
        assert_eq!(v, Vec2::new(0.0, 7.0));
    }

    proptest! {
        #[test]
        fn reflection_removes_normal_component(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            axis in 0usize..4,
        ) {
            let normal = [
                Vec2::new(-1.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(0.0, -1.0),
            ][axis];
            let out = reflect(Vec2::new(vx, vy), normal);
            prop_assert!(out.dot(normal).abs() < 1e-3);
        }

        #[test]
        fn time_of_impact_stays_in_unit_interval(
            ox in -20.0f32..20.0,
            oy in -20.0f32..20.0,
            dx in -40.0f32..40.0,
            dy in -40.0f32..40.0,
        ) {
            let old = Point2::new(ox, oy);
            let new = old + Vec2::new(dx, dy);
            let info = detect_sweep(
                old,
                new,
                Extent2::new(2.0, 2.0),
                Point2::new(5.0, -2.0),
                Extent2::new(4.0, 4.0),
            );
            if info.collided {
                prop_assert!(info.time_of_impact >= 0.0);
                prop_assert!(info.time_of_impact < 1.0);
                prop_assert!(info.normal.length_squared() == 1.0);
            } else {
                prop_assert_eq!(info.time_of_impact, 1.0);
            }
        }
    }
}
