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

/// Colors for scene elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Letterbox bars around the scene
    pub background: [f32; 4],
    pub sky: [f32; 4],
    pub ground: [f32; 4],
    pub player: [f32; 4],
    /// Player after the run ended
    pub player_hit: [f32; 4],
    pub obstacle: [f32; 4],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        background: [0.02, 0.02, 0.05, 1.0],
        sky: [0.53, 0.81, 0.92, 1.0],
        ground: [0.36, 0.25, 0.2, 1.0],
        player: [0.2, 0.8, 0.4, 1.0],
        player_hit: [0.9, 0.2, 0.2, 1.0],
        obstacle: [0.25, 0.25, 0.3, 1.0],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: [0.0, 0.0, 0.0, 1.0],
        sky: [1.0, 1.0, 1.0, 1.0],
        ground: [0.0, 0.0, 0.0, 1.0],
        player: [0.0, 0.3, 1.0, 1.0],
        player_hit: [1.0, 0.0, 0.0, 1.0],
        obstacle: [0.0, 0.0, 0.0, 1.0],
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
