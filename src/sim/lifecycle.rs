//! Running / game over state machine
//!
//! The one player input ("primary action": tap or Space) jumps while the run
//! is alive and restarts it once it is over.

use super::physics;
use super::state::{GameState, Playfield};

/// Result of dispatching the primary action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A jump started; `cue` says whether the jump sound should play
    Jumped { cue: bool },
    /// Already airborne, nothing happened
    Ignored,
    /// The run was reset; the frame loop must be resumed
    Restarted,
}

impl GameState {
    /// Jump if running and grounded
    pub fn jump(&mut self) -> bool {
        self.is_running() && physics::jump(&mut self.player, self.tuning.jump_power)
    }

    /// Start a fresh run from game over
    pub fn restart(&mut self, playfield: &Playfield) {
        let final_score = self.score;
        self.reset(playfield);
        log::info!("Restarted (previous score {})", final_score);
    }
}

/// Route the primary action by phase
pub fn primary_action(state: &mut GameState, playfield: &Playfield, muted: bool) -> ActionOutcome {
    if state.is_running() {
        if state.jump() {
            ActionOutcome::Jumped { cue: !muted }
        } else {
            ActionOutcome::Ignored
        }
    } else {
        state.restart(playfield);
        ActionOutcome::Restarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Obstacle, Player};
    use crate::Tuning;

    fn setup() -> (GameState, Playfield) {
        let tuning = Tuning::default();
        let pf = Playfield::new(480.0, 320.0, &tuning);
        (GameState::new(5, tuning, &pf), pf)
    }

    #[test]
    fn test_action_jumps_while_running() {
        let (mut state, pf) = setup();
        assert_eq!(
            primary_action(&mut state, &pf, false),
            ActionOutcome::Jumped { cue: true }
        );
        assert_eq!(state.player.vel_y, -12.0);
        assert_eq!(primary_action(&mut state, &pf, false), ActionOutcome::Ignored);
        assert_eq!(state.player.vel_y, -12.0);
    }

    #[test]
    fn test_muted_jump_has_no_cue() {
        let (mut state, pf) = setup();
        assert_eq!(
            primary_action(&mut state, &pf, true),
            ActionOutcome::Jumped { cue: false }
        );
    }

    #[test]
    fn test_action_restarts_after_game_over() {
        let (mut state, pf) = setup();
        state.player.y = 120.0;
        state.player.vel_y = 3.0;
        state.player.jumping = true;
        state.obstacles.push(Obstacle {
            id: 1,
            x: 10.0,
            width: 20.0,
            height: 20.0,
        });
        state.score = 321;
        state.speed = 4.5;
        state.last_spawn_ms = 9000.0;
        state.phase = GamePhase::GameOver;

        assert_eq!(primary_action(&mut state, &pf, false), ActionOutcome::Restarted);
        assert_eq!(state.player.y, Player::spawn_y(&state.tuning, &pf));
        assert_eq!(state.player.vel_y, 0.0);
        assert!(!state.player.jumping);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 4.0);
        assert!(state.is_running());
        assert_eq!(state.last_spawn_ms, 9000.0);
    }

    #[test]
    fn test_jump_ignored_when_over() {
        let (mut state, _) = setup();
        state.phase = GamePhase::GameOver;
        assert!(!state.jump());
        assert_eq!(state.player.vel_y, 0.0);
    }
}
