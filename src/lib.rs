//! Sweepbox - physics and collision core for a minimal 2D platformer
//!
//! Core modules:
//! - `sim`: deterministic simulation (geometry, world entities, swept
//!   collision, per-frame step)
//! - `tuning`: data-driven physics constants
//!
//! The crate contains no rendering, windowing, or event-polling code. A host
//! supplies a per-frame elapsed time (seconds) and the currently-held
//! movement keys, and reads back player/block/map geometry to draw.
//!
//! Coordinate convention, held throughout: +Y is up, and every rectangle is
//! anchored at its lower-left corner, so a rectangle at `position` with
//! extent `(w, h)` spans `[x, x + w] × [y, y + h]`.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Physics configuration defaults
pub mod consts {
    /// Gravitational acceleration on the Y axis (+Y is up), units/s².
    pub const GRAVITY: f32 = -9.81;

    /// Per-step linear velocity damping factor. Applied to the candidate
    /// velocity as `v -= DRAG_COEFFICIENT * v`, so motion decays slowly
    /// rather than getting clamped to zero.
    pub const DRAG_COEFFICIENT: f32 = 1.0e-4;

    /// Vertical acceleration while the up key is held, units/s².
    pub const INPUT_ACCEL_UP: f32 = 50.0;
    /// Vertical acceleration while the down key is held, units/s².
    pub const INPUT_ACCEL_DOWN: f32 = -40.0;
    /// Horizontal acceleration while the left key is held, units/s².
    pub const INPUT_ACCEL_LEFT: f32 = -20.0;
    /// Horizontal acceleration while the right key is held, units/s².
    pub const INPUT_ACCEL_RIGHT: f32 = 20.0;

    /// Block row layout: one block every `map.width / BLOCK_SPACING_DIVISOR`
    /// units.
    pub const BLOCK_SPACING_DIVISOR: f32 = 20.0;
    /// Block width as a fraction of map width.
    pub const BLOCK_WIDTH_DIVISOR: f32 = 200.0;
    /// Block height as a fraction of map height.
    pub const BLOCK_HEIGHT_DIVISOR: f32 = 9.0;
}
