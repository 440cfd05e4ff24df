//! Player vertical motion
//!
//! One call is one fixed step; there is no delta time.

use super::state::{Playfield, Player};

/// Apply gravity, move, and land on the ground line
///
/// Returns true on the step the player touches down (or stays down).
pub fn integrate(player: &mut Player, gravity: f32, playfield: &Playfield) -> bool {
    player.vel_y += gravity;
    player.y += player.vel_y * playfield.scale;

    if player.bottom(playfield.scale) >= playfield.ground_line() {
        player.y = player.resting_y(playfield);
        player.vel_y = 0.0;
        player.jumping = false;
        return true;
    }
    false
}

/// Start a jump if grounded
///
/// Returns false (and changes nothing) while already airborne.
pub fn jump(player: &mut Player, jump_power: f32) -> bool {
    if player.jumping {
        return false;
    }
    player.vel_y = jump_power;
    player.jumping = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use proptest::prelude::*;

    fn grounded(pf: &Playfield) -> Player {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, pf);
        player.y = player.resting_y(pf);
        player
    }

    #[test]
    fn test_gravity_accumulates_without_cap() {
        let pf = Playfield::new(480.0, 10_000.0, &Tuning::default());
        let mut player = Player::new(&Tuning::default(), &pf);
        player.y = 0.0;
        for _ in 0..100 {
            integrate(&mut player, 0.6, &pf);
        }
        assert!((player.vel_y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_velocity_scaled_into_position() {
        let pf = Playfield::new(960.0, 10_000.0, &Tuning::default());
        let mut player = Player::new(&Tuning::default(), &pf);
        player.y = 100.0;
        integrate(&mut player, 0.6, &pf);
        // vel 0.6 * scale 2
        assert!((player.y - 101.2).abs() < 1e-4);
    }

    #[test]
    fn test_landing_clamps_and_clears_jump() {
        let pf = Playfield::new(480.0, 320.0, &Tuning::default());
        let mut player = grounded(&pf);
        player.y -= 1.0;
        player.vel_y = 5.0;
        player.jumping = true;
        assert!(integrate(&mut player, 0.6, &pf));
        assert_eq!(player.bottom(pf.scale), pf.ground_line());
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_jump_is_debounced_while_airborne() {
        let pf = Playfield::new(480.0, 320.0, &Tuning::default());
        let mut player = grounded(&pf);
        assert!(jump(&mut player, -12.0));
        assert_eq!(player.vel_y, -12.0);
        integrate(&mut player, 0.6, &pf);
        let vel = player.vel_y;
        assert!(!jump(&mut player, -12.0));
        assert_eq!(player.vel_y, vel);
        assert!(player.jumping);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let pf = Playfield::new(480.0, 320.0, &Tuning::default());
        let mut player = grounded(&pf);
        jump(&mut player, -12.0);
        let mut steps = 0;
        while player.jumping {
            integrate(&mut player, 0.6, &pf);
            steps += 1;
            assert!(steps < 100, "player never landed");
        }
        // -12 + 0.6 n >= 0 after 20 steps up, about as many down
        assert!((38..=42).contains(&steps));
    }

    #[test]
    fn test_landing_stays_above_ground_at_odd_scale() {
        let pf = Playfield::new(1757.108, 1151.1119, &Tuning::default());
        let mut player = Player::new(&Tuning::default(), &pf);
        player.y = 0.0;
        while !integrate(&mut player, 0.6, &pf) {}
        assert!(player.bottom(pf.scale) <= pf.ground_line());
        // Resting steps clamp again without sinking
        for _ in 0..10 {
            assert!(integrate(&mut player, 0.6, &pf));
            assert!(player.bottom(pf.scale) <= pf.ground_line());
        }
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            width in 200.0f32..2000.0,
            height in 200.0f32..1200.0,
            presses in proptest::collection::vec(any::<bool>(), 1..300),
        ) {
            let tuning = Tuning::default();
            let pf = Playfield::new(width, height, &tuning);
            let mut player = Player::new(&tuning, &pf);
            prop_assert!(player.bottom(pf.scale) <= pf.ground_line());
            for press in presses {
                if press {
                    jump(&mut player, tuning.jump_power);
                }
                integrate(&mut player, tuning.gravity, &pf);
                prop_assert!(player.bottom(pf.scale) <= pf.ground_line());
            }
        }
    }
}
