//! Deterministic simulation module
//!
//! All physics logic lives here. This module must be pure and deterministic:
//! - Single-threaded, no suspension points
//! - Each step is a pure function of (dt, map, player, blocks)
//! - Stable block iteration order (construction order, frozen after init)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod step;
pub mod world;

pub use collision::{CollisionInfo, detect_sweep, reflect};
pub use geom::{Extent2, Point2};
pub use step::{FrameInput, Simulation, apply_gravity, step};
pub use world::{Block, Map, Player, spawn_blocks};
