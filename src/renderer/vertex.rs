//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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
    pub const ROAD: [f32; 4] = [0.157, 0.157, 0.157, 1.0];
    pub const SIDEWALK: [f32; 4] = [0.47, 0.47, 0.47, 1.0];
    pub const BUILDING: [f32; 4] = [0.667, 0.667, 0.667, 1.0];
    pub const LANE_LINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_CAR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const RIVAL_CAR: [f32; 4] = [0.784, 0.0, 0.0, 1.0];
    pub const MONEY: [f32; 4] = [0.0, 0.706, 0.0, 1.0];
    pub const EQUIPMENT: [f32; 4] = [0.784, 0.784, 0.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CRASH_BURST: [f32; 4] = [1.0, 0.5, 0.1, 0.85];
    pub const GAME_OVER_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.55];
    pub const RESTART_BUTTON: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
}
