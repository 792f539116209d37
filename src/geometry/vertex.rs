use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Local-space vertex position, padded to an OpenCL `float3` (16 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    _pad: f32,
}

impl Vertex {
    pub fn new(position: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            _pad: 0.0,
        }
    }
}

impl From<Vec3> for Vertex {
    fn from(position: Vec3) -> Self {
        Self {
            position,
            _pad: 0.0,
        }
    }
}
