//! Per-frame integration and contact resolution
//!
//! Each step ends in exactly one of two outcomes, decided once and never
//! revisited mid-frame: the candidate kinematic state is committed (no
//! contact), or the stored velocity is reflected against the first contact
//! normal and the candidate state is discarded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{detect_sweep, reflect};
use super::world::{Block, Map, Player, spawn_blocks};
use crate::tuning::Tuning;

/// Held movement keys for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Accumulate gravity into the player's acceleration.
///
/// Called once per step, before integration. The contribution is scaled by
/// elapsed time and accumulates across frames; nothing resets it except a
/// landing contact's counter-gravity write or a vertical input edge.
pub fn apply_gravity(dt_seconds: f32, tuning: &Tuning, player: &mut Player) {
    player.acceleration.y += dt_seconds * tuning.gravity;
}

/// Advance the player by one step against the map and blocks.
///
/// Computes a candidate position (`p + ½·a·dt² + v·dt`) and velocity
/// (`a·dt + v`, then drag), sweeps the current-to-candidate motion against
/// every block in order and then the floor, and either reflects (first hit
/// wins, candidate discarded) or commits the candidate state unchanged.
///
/// On a contact whose normal is `(0, 1)` (landed on top of something), the
/// vertical acceleration is set to an equal and opposite gravitational
/// contribution so the next step's accumulation cancels exactly and the
/// body does not re-penetrate the surface.
///
/// `dt_seconds` is taken as given, never clamped: a pathologically large
/// value (a debugger pause, say) produces a correspondingly large jump and
/// can tunnel past geometry the sweep line does not intersect.
pub fn step(dt_seconds: f32, map: &Map, player: &mut Player, blocks: &[Block], tuning: &Tuning) {
    let dt = dt_seconds;

    let candidate_position =
        player.position + 0.5 * player.acceleration * (dt * dt) + player.velocity * dt;

    let mut candidate_velocity = player.acceleration * dt + player.velocity;
    candidate_velocity -= tuning.drag * candidate_velocity;

    for block in blocks {
        let hit = detect_sweep(
            player.position,
            candidate_position,
            player.bounding_box,
            block.position,
            block.bounding_box,
        );

        if hit.collided {
            log::debug!(
                "block contact: normal=({}, {}) t={:.4}",
                hit.normal.x,
                hit.normal.y,
                hit.time_of_impact
            );
            player.velocity = reflect(player.velocity, hit.normal);
            if hit.normal == Vec2::new(0.0, 1.0) {
                player.acceleration.y = dt * -tuning.gravity;
            }
            return;
        }
    }

    // Floor test: the candidate's lower edge crossing the floor plane while
    // horizontally within the map, with a one-bounding-box margin.
    if candidate_position.y <= map.floor_height
        && candidate_position.x >= -player.bounding_box.width
        && candidate_position.x <= map.width
    {
        let normal = Vec2::new(0.0, 1.0);
        player.velocity = reflect(player.velocity, normal);
        player.acceleration.y = dt * -tuning.gravity;
        return;
    }

    player.position = candidate_position;
    player.velocity = candidate_velocity;
}

/// Owns the world and drives one step per frame.
///
/// The host supplies the previous frame's elapsed time and the currently
/// held keys; the rendering layer reads the committed state back through the
/// accessors.
#[derive(Debug, Clone)]
pub struct Simulation {
    map: Map,
    player: Player,
    blocks: Vec<Block>,
    tuning: Tuning,
    held: FrameInput,
}

impl Simulation {
    /// Build a world for `map`, spawning the block row from its dimensions.
    pub fn new(map: Map, player: Player, tuning: Tuning) -> Self {
        let blocks = spawn_blocks(&map);
        Self {
            map,
            player,
            blocks,
            tuning,
            held: FrameInput::default(),
        }
    }

    /// Advance one frame: resolve input edges into acceleration writes,
    /// accumulate gravity, then integrate and resolve contacts.
    pub fn advance(&mut self, dt_seconds: f32, input: FrameInput) {
        self.apply_input(input);
        apply_gravity(dt_seconds, &self.tuning, &mut self.player);
        step(
            dt_seconds,
            &self.map,
            &mut self.player,
            &self.blocks,
            &self.tuning,
        );
    }

    /// Edge-detect held keys against the previous frame. A press writes the
    /// axis's acceleration magnitude, a release zeroes that axis; a key that
    /// stays held does not rewrite the axis, so gravity keeps accumulating
    /// underneath it.
    fn apply_input(&mut self, input: FrameInput) {
        let held = self.held;

        if input.up && !held.up {
            self.player.acceleration.y = self.tuning.accel_up;
        } else if !input.up && held.up {
            self.player.acceleration.y = 0.0;
        }

        if input.down && !held.down {
            self.player.acceleration.y = self.tuning.accel_down;
        } else if !input.down && held.down {
            self.player.acceleration.y = 0.0;
        }

        if input.left && !held.left {
            self.player.acceleration.x = self.tuning.accel_left;
        } else if !input.left && held.left {
            self.player.acceleration.x = 0.0;
        }

        if input.right && !held.right {
            self.player.acceleration.x = self.tuning.accel_right;
        } else if !input.right && held.right {
            self.player.acceleration.x = 0.0;
        }

        self.held = input;
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
