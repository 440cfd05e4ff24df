//! Axis-aligned collision detection
//!
//! Boxes that merely share an edge do not collide; every comparison is strict.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Playfield, Player};

/// Axis-aligned bounding box in screen units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check the player against one obstacle
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, playfield: &Playfield) -> bool {
    player.bounds(playfield).overlaps(&obstacle.bounds(playfield))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direct_hit() {
        let player = Aabb::from_corners(10.0, 10.0, 30.0, 30.0);
        let obstacle = Aabb::from_corners(15.0, 5.0, 35.0, 40.0);
        assert!(player.overlaps(&obstacle));
        assert!(obstacle.overlaps(&player));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let player = Aabb::from_corners(10.0, 10.0, 30.0, 30.0);
        let right = Aabb::from_corners(30.0, 5.0, 50.0, 40.0);
        let below = Aabb::from_corners(10.0, 30.0, 30.0, 50.0);
        assert!(!player.overlaps(&right));
        assert!(!player.overlaps(&below));
    }

    #[test]
    fn test_player_clears_short_obstacle() {
        let pf = Playfield::new(480.0, 320.0, &crate::Tuning::default());
        let player = Player {
            x: 50.0,
            y: 200.0,
            size: 20.0,
            vel_y: 0.0,
            jumping: true,
        };
        // Top of the obstacle is at 290 - 40 = 250, player bottom is 220
        let obstacle = Obstacle {
            id: 1,
            x: 45.0,
            width: 20.0,
            height: 40.0,
        };
        assert!(!player_hits_obstacle(&player, &obstacle, &pf));

        let tall = Obstacle {
            height: 80.0,
            ..obstacle
        };
        assert!(player_hits_obstacle(&player, &tall, &pf));
    }

    #[test]
    fn test_player_hits_only_overlapping_obstacle() {
        let pf = Playfield::new(480.0, 320.0, &crate::Tuning::default());
        let player = Player {
            x: 50.0,
            y: 270.0,
            size: 20.0,
            vel_y: 0.0,
            jumping: false,
        };
        let obstacles = vec![
            Obstacle {
                id: 1,
                x: 300.0,
                width: 20.0,
                height: 30.0,
            },
            Obstacle {
                id: 2,
                x: 60.0,
                width: 20.0,
                height: 30.0,
            },
        ];
        assert!(!player_hits_obstacle(&player, &obstacles[0], &pf));
        assert!(player_hits_obstacle(&player, &obstacles[1], &pf));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, aw in 0.0f32..50.0, ah in 0.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, bw in 0.0f32..50.0, bh in 0.0f32..50.0,
        ) {
            let a = Aabb::from_corners(ax, ay, ax + aw, ay + ah);
            let b = Aabb::from_corners(bx, by, bx + bw, by + bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_shared_vertical_edge_never_collides(
            x in -100.0f32..100.0, y in -100.0f32..100.0,
            w in 1.0f32..50.0, h in 1.0f32..50.0, w2 in 1.0f32..50.0,
        ) {
            let a = Aabb::from_corners(x, y, x + w, y + h);
            let b = Aabb::from_corners(a.max.x, y, a.max.x + w2, y + h);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
