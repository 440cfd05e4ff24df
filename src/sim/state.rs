//! Game state and core simulation types
//!
//! Coordinates are screen units (CSS pixels), y pointing down. The player's
//! `x` and `size` are logical units and get multiplied by the playfield scale
//! wherever they meet screen space; everything else is stored already scaled.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Steps advance physics, spawning and score
    Running,
    /// Hit an obstacle; waiting for a restart
    GameOver,
}

/// Viewport geometry
///
/// Owned by the platform layer and handed to every step; the simulation
/// only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// `width / reference_width`
    pub scale: f32,
    /// Distance from the bottom edge to the ground line
    pub ground_offset: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        Self {
            width,
            height,
            scale: width / tuning.reference_width,
            ground_offset: tuning.ground_offset,
        }
    }

    /// Y of the ground surface; nothing rests below it
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_offset
    }
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position (logical units, never changes)
    pub x: f32,
    /// Top edge (screen units)
    pub y: f32,
    /// Side length (logical units)
    pub size: f32,
    /// Vertical velocity (logical units per step, negative is up)
    pub vel_y: f32,
    /// True while airborne
    pub jumping: bool,
}

impl Player {
    pub fn new(tuning: &Tuning, playfield: &Playfield) -> Self {
        Self {
            x: tuning.player_x,
            y: Self::spawn_y(tuning, playfield),
            size: tuning.player_size,
            vel_y: 0.0,
            jumping: false,
        }
    }

    /// Starting height: the spawn offset, but never below the ground
    pub fn spawn_y(tuning: &Tuning, playfield: &Playfield) -> f32 {
        let side = tuning.player_size * playfield.scale;
        let resting = clamp_to_ground(playfield.ground_line(), side);
        (playfield.height - tuning.player_spawn_offset).min(resting)
    }

    /// Lowest `y` that keeps this player on or above the ground line
    #[inline]
    pub fn resting_y(&self, playfield: &Playfield) -> f32 {
        clamp_to_ground(playfield.ground_line(), self.scaled_size(playfield.scale))
    }

    /// Side length on screen
    #[inline]
    pub fn scaled_size(&self, scale: f32) -> f32 {
        self.size * scale
    }

    /// Bottom edge on screen
    #[inline]
    pub fn bottom(&self, scale: f32) -> f32 {
        self.y + self.scaled_size(scale)
    }

    /// Screen-space bounding box
    pub fn bounds(&self, playfield: &Playfield) -> Aabb {
        let left = self.x * playfield.scale;
        let side = self.scaled_size(playfield.scale);
        Aabb::from_corners(left, self.y, left + side, self.y + side)
    }
}

/// Largest `y` with `y + side <= ground` in f32
///
/// `ground - side` alone can round so that adding `side` back lands one ulp
/// past the ground.
pub fn clamp_to_ground(ground: f32, side: f32) -> f32 {
    let mut y = ground - side;
    while y + side > ground {
        y = y.next_down();
    }
    y
}

/// A ground-anchored block scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge (screen units)
    pub x: f32,
    /// Screen units, fixed at spawn
    pub width: f32,
    /// Screen units, fixed at spawn
    pub height: f32,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Screen-space bounding box, standing on the ground line
    pub fn bounds(&self, playfield: &Playfield) -> Aabb {
        let ground = playfield.ground_line();
        Aabb::from_corners(self.x, ground - self.height, self.right(), ground)
    }
}

/// Read-only view of a step's result for renderers and HUDs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: Aabb,
    pub obstacles: Vec<Aabb>,
    pub score: u64,
    pub running: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Obstacle height source
    rng: Pcg32,
    /// Balance values this run was started with
    pub tuning: Tuning,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Scroll speed (logical units per step)
    pub speed: f64,
    pub phase: GamePhase,
    /// Wall-clock time of the last spawn (ms)
    pub last_spawn_ms: f64,
    /// Steps simulated since the last reset
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning, playfield: &Playfield) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning, playfield),
            obstacles: Vec::new(),
            score: 0,
            speed: tuning.initial_speed,
            phase: GamePhase::Running,
            last_spawn_ms: 0.0,
            time_ticks: 0,
            next_id: 1,
            tuning,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Put the run back at its starting values
    ///
    /// The spawn timestamp and RNG carry over, so a restart does not replay
    /// the previous run's obstacles.
    pub fn reset(&mut self, playfield: &Playfield) {
        self.player.y = Player::spawn_y(&self.tuning, playfield);
        self.player.vel_y = 0.0;
        self.player.jumping = false;
        self.obstacles.clear();
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
    }

    /// Keep the player above the ground after the viewport changes
    pub fn fit_to(&mut self, playfield: &Playfield) {
        let resting = self.player.resting_y(playfield);
        if self.player.y > resting {
            self.player.y = resting;
            self.player.vel_y = 0.0;
            self.player.jumping = false;
        }
    }

    pub fn snapshot(&self, playfield: &Playfield) -> Snapshot {
        Snapshot {
            player: self.player.bounds(playfield),
            obstacles: self.obstacles.iter().map(|o| o.bounds(playfield)).collect(),
            score: self.score,
            running: self.is_running(),
        }
    }
}
