//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// #ffffff
    pub const GROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// #ff4b5c
    pub const PLAYER: [f32; 4] = [1.0, 0.294, 0.361, 1.0];
    /// #00f5d4
    pub const OBSTACLE: [f32; 4] = [0.0, 0.961, 0.831, 1.0];
    /// Player tint once the run is over
    pub const PLAYER_CRASHED: [f32; 4] = [0.55, 0.2, 0.25, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.067, 0.067, 0.094, 1.0];
}
