use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::Aabb;

/// Flattened BVH node (48 bytes).
///
/// `triangle_count == 0` marks an interior node: its first child sits in
/// the next slot and its second child at `second_child_offset`. Otherwise
/// the node is a leaf covering `triangle_count` triangles starting at
/// `first_triangle_offset` in the reordered triangle array.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LinearNode {
    pub bounds_min: Vec3,
    _pad0: u32,
    pub bounds_max: Vec3,
    _pad1: u32,
    pub first_triangle_offset: u32,
    pub triangle_count: u32,
    pub split_axis: u32,
    pub second_child_offset: u32,
}

impl LinearNode {
    pub fn new_leaf(bounds: Aabb, first_triangle_offset: u32, triangle_count: u32) -> Self {
        Self {
            bounds_min: bounds.min,
            bounds_max: bounds.max,
            first_triangle_offset,
            triangle_count,
            ..Default::default()
        }
    }

    /// `second_child_offset` is patched in once the right subtree is laid out.
    pub fn new_interior(bounds: Aabb, split_axis: u32) -> Self {
        Self {
            bounds_min: bounds.min,
            bounds_max: bounds.max,
            split_axis,
            ..Default::default()
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.triangle_count > 0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.bounds_min,
            max: self.bounds_max,
        }
    }

    pub fn triangle_range(&self) -> std::ops::Range<usize> {
        let first = self.first_triangle_offset as usize;
        first..first + self.triangle_count as usize
    }
}
