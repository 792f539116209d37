use glam::Vec3;

use super::Aabb;
use crate::geometry::GeometrySnapshot;

/// World-space bounds of one input triangle, used only while building.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleBoundsInfo {
    pub triangle_index: usize,
    pub world_bounds: Aabb,
    /// Midpoint of `world_bounds`, not the vertex average.
    pub centroid: Vec3,
}

impl TriangleBoundsInfo {
    pub fn new(triangle_index: usize, world_bounds: Aabb) -> Self {
        Self {
            triangle_index,
            world_bounds,
            centroid: world_bounds.centroid(),
        }
    }
}

/// One info per triangle, in input order. The snapshot must be validated.
pub fn extract(snapshot: &GeometrySnapshot) -> Vec<TriangleBoundsInfo> {
    snapshot
        .triangles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let [a, b, c] = snapshot.world_positions(t);
            TriangleBoundsInfo::new(i, Aabb::from_triangle(a, b, c))
        })
        .collect()
}
