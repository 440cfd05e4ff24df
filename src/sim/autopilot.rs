//! Idle/demo mode: presses jump on the player's behalf
//!
//! Heuristic only. It assumes the default jump arc, which stays above the
//! tallest obstacle from roughly step 5 to step 34 of the jump.

use super::state::{GameState, Playfield};

/// Steps of scrolling between the jump and the obstacle reaching the player
const LEAD_STEPS: f32 = 14.0;

/// Should the player jump this step?
pub fn wants_jump(state: &GameState, playfield: &Playfield) -> bool {
    if !state.is_running() || state.player.jumping {
        return false;
    }

    let player_right = state.player.bounds(playfield).max.x;
    let lead = state.speed as f32 * playfield.scale * LEAD_STEPS;

    state
        .obstacles
        .iter()
        .filter(|o| o.x >= player_right)
        .map(|o| o.x - player_right)
        .reduce(f32::min)
        .is_some_and(|gap| gap <= lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::Tuning;

    fn setup() -> (GameState, Playfield) {
        let tuning = Tuning::default();
        let pf = Playfield::new(480.0, 320.0, &tuning);
        let mut state = GameState::new(1, tuning, &pf);
        state.player.y = 270.0;
        (state, pf)
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            width: 20.0,
            height: 50.0,
        }
    }

    #[test]
    fn test_waits_for_far_obstacle() {
        let (mut state, pf) = setup();
        state.obstacles.push(obstacle_at(400.0));
        assert!(!wants_jump(&state, &pf));
    }

    #[test]
    fn test_jumps_inside_lead() {
        let (mut state, pf) = setup();
        // Player right edge is 70; lead is 4 * 14 = 56
        state.obstacles.push(obstacle_at(120.0));
        assert!(wants_jump(&state, &pf));
    }

    #[test]
    fn test_ignores_obstacles_behind() {
        let (mut state, pf) = setup();
        state.obstacles.push(obstacle_at(20.0));
        assert!(!wants_jump(&state, &pf));
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let (mut state, pf) = setup();
        state.obstacles.push(obstacle_at(120.0));
        state.player.jumping = true;
        assert!(!wants_jump(&state, &pf));
    }
}
