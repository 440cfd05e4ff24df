//! Game balance values
//!
//! Everything here is in logical units (authored against a 480 wide
//! viewport) and per fixed step unless stated otherwise.

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_OFFSET, PLAYER_SPAWN_OFFSET, REFERENCE_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the player's vertical velocity every step
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_power: f32,
    /// Minimum wall-clock time between spawns (ms)
    pub obstacle_interval_ms: f64,
    pub obstacle_width: f32,
    /// Shortest obstacle
    pub obstacle_min_height: f32,
    /// Height is drawn from `[min, min + range)`
    pub obstacle_height_range: f32,
    /// Scroll speed at the start of a run
    pub initial_speed: f64,
    /// Added to the scroll speed every step while running
    pub speed_increment: f64,
    pub player_x: f32,
    pub player_size: f32,
    /// Player starts this far above the bottom of the viewport (screen units)
    pub player_spawn_offset: f32,
    /// Ground line sits this far above the bottom of the viewport (screen units)
    pub ground_offset: f32,
    pub reference_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_power: -12.0,
            obstacle_interval_ms: 1500.0,
            obstacle_width: 20.0,
            obstacle_min_height: 20.0,
            obstacle_height_range: 30.0,
            initial_speed: 4.0,
            speed_increment: 0.0008,
            player_x: 50.0,
            player_size: 20.0,
            player_spawn_offset: PLAYER_SPAWN_OFFSET,
            ground_offset: GROUND_OFFSET,
            reference_width: REFERENCE_WIDTH,
        }
    }
}

impl Tuning {
    /// Replace values that would break the simulation with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !is_positive(self.reference_width) {
            self.reference_width = defaults.reference_width;
        }
        if self.initial_speed.is_nan() || self.initial_speed <= 0.0 {
            self.initial_speed = defaults.initial_speed;
        }
        if !is_positive(self.player_size) {
            self.player_size = defaults.player_size;
        }
        if !is_positive(self.obstacle_width) {
            self.obstacle_width = defaults.obstacle_width;
        }
        if self.speed_increment.is_nan() || self.speed_increment < 0.0 {
            self.speed_increment = defaults.speed_increment;
        }
        if self.obstacle_height_range.is_nan() || self.obstacle_height_range < 0.0 {
            self.obstacle_height_range = defaults.obstacle_height_range;
        }
        if self.obstacle_interval_ms.is_nan() || self.obstacle_interval_ms < 0.0 {
            self.obstacle_interval_ms = defaults.obstacle_interval_ms;
        }
        self
    }
}

/// False for NaN as well as zero and negatives
fn is_positive(value: f32) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.jump_power, -12.0);
        assert_eq!(tuning.obstacle_interval_ms, 1500.0);
    }

    #[test]
    fn test_sanitized_rejects_nonpositive_speed() {
        let tuning = Tuning {
            initial_speed: 0.0,
            reference_width: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.initial_speed, 4.0);
        assert_eq!(tuning.reference_width, 480.0);
    }
}
