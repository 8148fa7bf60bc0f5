//! World entities: the map, the player, and static blocks
//!
//! Plain data, no behavior. The block list is built once at world init and
//! is read-only for the rest of the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Extent2, Point2};
use crate::consts::{BLOCK_HEIGHT_DIVISOR, BLOCK_SPACING_DIVISOR, BLOCK_WIDTH_DIVISOR};

/// Static world geometry: a floor plane and the world bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Map {
    /// Height of the floor collision plane.
    pub floor_height: f32,
    /// Horizontal world extent, starting at x = 0.
    pub width: f32,
    /// Vertical world extent.
    pub height: f32,
}

impl Map {
    pub const fn new(width: f32, height: f32, floor_height: f32) -> Self {
        Self {
            floor_height,
            width,
            height,
        }
    }
}

/// The single dynamic body.
///
/// `bounding_box` is fixed for the session; position, velocity, and
/// acceleration are mutated once per step by the integrator and by the
/// collision resolver's reflection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub bounding_box: Extent2,
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Player {
    pub fn new(bounding_box: Extent2, position: Point2) -> Self {
        Self {
            bounding_box,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        }
    }
}

/// An immovable obstacle. Immutable after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub bounding_box: Extent2,
    pub position: Point2,
}

/// Build the static block row for a map.
///
/// Layout is a pure function of the map dimensions: one block every
/// `width / 20` units, each `width / 200` wide and `height / 9` tall,
/// resting on the floor.
pub fn spawn_blocks(map: &Map) -> Vec<Block> {
    let count = (map.width / BLOCK_SPACING_DIVISOR).ceil() as usize;
    let spacing = map.width / BLOCK_SPACING_DIVISOR;
    let extent = Extent2::new(
        map.width / BLOCK_WIDTH_DIVISOR,
        map.height / BLOCK_HEIGHT_DIVISOR,
    );

    let blocks: Vec<Block> = (0..count)
        .map(|i| Block {
            bounding_box: extent,
            position: Point2::new(i as f32 * spacing, map.floor_height),
        })
        .collect();

    log::info!(
        "world: {} blocks, spacing {}, extent {}x{}",
        blocks.len(),
        spacing,
        extent.width,
        extent.height
    );

    blocks
}
