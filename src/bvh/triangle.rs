use bytemuck::Pod;
use bytemuck::Zeroable;

/// Indexed triangle as the traversal kernel reads it (20 bytes).
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Triangle {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
    pub material: u32,
    pub transform: u32,
}

impl Triangle {
    pub fn new(indices: [u32; 3], material: u32, transform: u32) -> Self {
        Self {
            v0: indices[0],
            v1: indices[1],
            v2: indices[2],
            material,
            transform,
        }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }
}
