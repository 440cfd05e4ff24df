//! Fixed step simulation tick
//!
//! Core game loop that advances the simulation one step.

use super::obstacles;
use super::physics;
use super::score;
use super::state::{GameState, Playfield};

/// Inputs for a single tick
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Wall-clock time of this step (ms), used only for spawn gating
    pub now_ms: f64,
    /// Viewport geometry for this step
    pub playfield: Playfield,
}

/// What a tick did, for logging and audio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Player is resting on the ground after the step
    pub grounded: bool,
    /// ID of an obstacle spawned this step
    pub spawned: Option<u32>,
    /// Obstacles dropped off the left edge
    pub pruned: usize,
    /// ID of the obstacle that ended the run
    pub collided: Option<u32>,
}

/// Advance the game state by one step
///
/// Physics, then spawning, then scroll/prune/collide, then scoring. Does
/// nothing once the run is over.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::default();
    }

    let playfield = &input.playfield;
    state.time_ticks += 1;

    let grounded = physics::integrate(&mut state.player, state.tuning.gravity, playfield);
    let spawned = obstacles::maybe_spawn(state, input.now_ms, playfield);
    let report = obstacles::advance(state, playfield);
    score::advance(state);

    if report.hit.is_some() {
        log::info!(
            "Game over after {} steps: score {}, speed {:.3}",
            state.time_ticks,
            state.score,
            state.speed
        );
    }

    TickOutcome {
        grounded,
        spawned,
        pruned: report.pruned,
        collided: report.hit,
    }
}
