//! Obstacle spawning, scrolling and recycling

use rand::Rng;

use super::collision::player_hits_obstacle;
use super::state::{GamePhase, GameState, Obstacle, Playfield};

/// Spawn one obstacle at the right edge if the interval has elapsed
///
/// At most one spawn per call, however late the call is.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64, playfield: &Playfield) -> Option<u32> {
    if now_ms - state.last_spawn_ms <= state.tuning.obstacle_interval_ms {
        return None;
    }

    let min = state.tuning.obstacle_min_height;
    let range = state.tuning.obstacle_height_range;
    let logical = if range > 0.0 {
        state.rng_mut().random_range(min..min + range)
    } else {
        min
    };
    let height = logical * playfield.scale;
    let width = state.tuning.obstacle_width * playfield.scale;

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        x: playfield.width,
        width,
        height,
    });
    state.last_spawn_ms = now_ms;

    log::debug!("Spawned obstacle {} ({:.1}x{:.1})", id, width, height);
    Some(id)
}

/// What happened to the obstacle collection during one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Obstacles removed after leaving the playfield
    pub pruned: usize,
    /// Obstacle the player ran into
    pub hit: Option<u32>,
}

/// Scroll every obstacle left, drop the ones that left the playfield and
/// test the rest against the player
///
/// A hit ends the run; the pass still finishes so pruning stays exact.
pub fn advance(state: &mut GameState, playfield: &Playfield) -> AdvanceReport {
    let dx = state.speed as f32 * playfield.scale;
    let before = state.obstacles.len();
    let mut hit = None;

    let player = &state.player;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.x -= dx;
        if obstacle.is_offscreen() {
            return false;
        }
        if hit.is_none() && player_hits_obstacle(player, obstacle, playfield) {
            hit = Some(obstacle.id);
        }
        true
    });

    if hit.is_some() {
        state.phase = GamePhase::GameOver;
    }

    AdvanceReport {
        pruned: before - state.obstacles.len(),
        hit,
    }
}
