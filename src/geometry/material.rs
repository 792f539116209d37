use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Surface description read by the shading kernel (48 bytes).
/// The BVH builder only carries the index; the table is uploaded as is.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub albedo: Vec3,
    _pad0: f32,
    pub emission: Vec3,
    _pad1: f32,
    pub is_metal: u32,
    pub is_glass: u32,
    pub refractive_index: f32,
    _pad2: u32,
}

impl Material {
    pub fn new_lambertian(albedo: Vec3) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    pub fn new_emissive(albedo: Vec3, emission: Vec3) -> Self {
        Self {
            albedo,
            emission,
            ..Default::default()
        }
    }

    pub fn new_metal(albedo: Vec3) -> Self {
        Self {
            albedo,
            is_metal: 1,
            ..Default::default()
        }
    }

    pub fn new_dielectric(refractive_index: f32) -> Self {
        Self {
            albedo: Vec3::ONE,
            is_glass: 1,
            refractive_index,
            ..Default::default()
        }
    }
}
