//! Shape generation for 2D primitives
//!
//! Geometry is emitted in playfield coordinates (CSS pixels, y down); the
//! pipeline maps it to clip space.

use super::vertex::{Vertex, colors};
use crate::sim::{Aabb, GameState, Playfield};

/// Two triangles covering a box
pub fn rect(bounds: &Aabb, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (bounds.min.x, bounds.min.y);
    let (x1, y1) = (bounds.max.x, bounds.max.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Ground strip, obstacles, then the player on top
pub fn scene(state: &GameState, playfield: &Playfield) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.obstacles.len() + 2) * 6);

    let ground = Aabb::from_corners(0.0, playfield.ground_line(), playfield.width, playfield.height);
    vertices.extend(rect(&ground, colors::GROUND));

    for obstacle in &state.obstacles {
        vertices.extend(rect(&obstacle.bounds(playfield), colors::OBSTACLE));
    }

    let player_color = if state.is_running() {
        colors::PLAYER
    } else {
        colors::PLAYER_CRASHED
    };
    vertices.extend(rect(&state.player.bounds(playfield), player_color));

    vertices
}
