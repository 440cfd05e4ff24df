//! Score and difficulty ramp

use super::state::GameState;

/// One point and a little more speed per step, only while running
pub fn advance(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.score += 1;
    state.speed += state.tuning.speed_increment;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Playfield};
    use crate::Tuning;

    #[test]
    fn test_frozen_after_game_over() {
        let tuning = Tuning::default();
        let pf = Playfield::new(480.0, 320.0, &tuning);
        let mut state = GameState::new(1, tuning, &pf);
        advance(&mut state);
        assert_eq!(state.score, 1);
        assert!((state.speed - 4.0008).abs() < 1e-12);

        state.phase = GamePhase::GameOver;
        advance(&mut state);
        assert_eq!(state.score, 1);
        assert!((state.speed - 4.0008).abs() < 1e-12);
    }

    #[test]
    fn test_speed_ramp_holds_over_an_hour() {
        let tuning = Tuning::default();
        let pf = Playfield::new(480.0, 320.0, &tuning);
        let mut state = GameState::new(1, tuning, &pf);
        let steps = 60 * 60 * 60;
        for _ in 0..steps {
            let before = state.speed;
            advance(&mut state);
            assert!(state.speed > before);
            assert!((state.speed - before - 0.0008).abs() < 1e-9);
        }
        assert!((state.speed - (4.0 + steps as f64 * 0.0008)).abs() < 1e-6);
    }

    #[test]
    fn test_speed_still_grows_when_large() {
        let tuning = Tuning::default();
        let pf = Playfield::new(480.0, 320.0, &tuning);
        let mut state = GameState::new(1, tuning, &pf);
        state.speed = 16384.0;
        advance(&mut state);
        assert!(state.speed > 16384.0);
    }
}
