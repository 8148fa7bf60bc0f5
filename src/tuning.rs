//! Data-driven physics constants
//!
//! Everything a host might want to retune without recompiling: gravity,
//! drag, and the acceleration each movement key applies. Serialized as JSON;
//! missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravitational acceleration on the Y axis (+Y is up), units/s².
    pub gravity: f32,
    /// Per-step linear velocity damping factor.
    pub drag: f32,
    /// Vertical acceleration while the up key is held, units/s².
    pub accel_up: f32,
    /// Vertical acceleration while the down key is held, units/s².
    pub accel_down: f32,
    /// Horizontal acceleration while the left key is held, units/s².
    pub accel_left: f32,
    /// Horizontal acceleration while the right key is held, units/s².
    pub accel_right: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag: DRAG_COEFFICIENT,
            accel_up: INPUT_ACCEL_UP,
            accel_down: INPUT_ACCEL_DOWN,
            accel_left: INPUT_ACCEL_LEFT,
            accel_right: INPUT_ACCEL_RIGHT,
        }
    }
}

impl Tuning {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
