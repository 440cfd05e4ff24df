//! WebGPU rendering module
//!
//! Draws the playfield as flat colored rectangles. Text (score, game over)
//! lives in the DOM overlay instead.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
