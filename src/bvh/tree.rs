use glam::Mat4;
use std::time::Instant;

use super::{build, flatten, info, Aabb, LinearNode, Triangle};
use crate::error::Result;
use crate::geometry::{GeometrySnapshot, Vertex};

/// Summary of a built hierarchy, for logs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BvhStats {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    pub largest_leaf: usize,
}

/// Pointer-free BVH ready for upload.
///
/// Holds the four device arrays: vertices, triangles in leaf order,
/// transforms and the pre-order node array. Immutable once built; a
/// geometry change means building a new one.
#[derive(Debug, Default, Clone)]
pub struct Bvh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    transforms: Vec<Mat4>,
    nodes: Vec<LinearNode>,
}

impl TryFrom<GeometrySnapshot> for Bvh {
    type Error = crate::error::Error;

    fn try_from(snapshot: GeometrySnapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}

impl Bvh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>, transforms: Vec<Mat4>) -> Result<Self> {
        Self::from_snapshot(GeometrySnapshot::new(vertices, triangles, transforms))
    }

    /// Builds the hierarchy. Triangles come back reordered; callers must not
    /// rely on their input positions.
    pub fn from_snapshot(snapshot: GeometrySnapshot) -> Result<Self> {
        snapshot.validate()?;
        let started = Instant::now();

        let mut infos = info::extract(&snapshot);
        let tree = build::build(&mut infos, &snapshot.triangles);
        log::debug!("partitioned {} triangles into {} nodes", infos.len(), tree.len());
        let nodes = flatten::flatten(&tree);

        let GeometrySnapshot {
            vertices,
            transforms,
            ..
        } = snapshot;
        let ret = Self {
            vertices,
            triangles: tree.into_ordered_triangles(),
            transforms,
            nodes,
        };
        if ret.is_empty() {
            log::warn!("scene has no triangles; every ray will miss");
        }
        log::info!("built BVH in {:?}: {:?}", started.elapsed(), ret.stats());
        Ok(ret)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangles in leaf order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn nodes(&self) -> &[LinearNode] {
        &self.nodes
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounds of the whole scene; empty when there is no geometry.
    pub fn root_bounds(&self) -> Aabb {
        self.nodes.first().map(LinearNode::bounds).unwrap_or(Aabb::EMPTY)
    }

    pub fn vertices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangles_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn transforms_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }

    pub fn nodes_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nodes)
    }

    /// Named device buffers in kernel binding order.
    pub fn buffers(&self) -> [(&'static str, &[u8]); 4] {
        [
            ("vertices", self.vertices_bytes()),
            ("triangles", self.triangles_bytes()),
            ("transforms", self.transforms_bytes()),
            ("nodes", self.nodes_bytes()),
        ]
    }

    pub fn stats(&self) -> BvhStats {
        let mut stats = BvhStats {
            nodes: self.nodes.len(),
            ..Default::default()
        };
        if self.nodes.is_empty() {
            return stats;
        }
        let mut stack = vec![(0usize, 1usize)];
        while let Some((i, depth)) = stack.pop() {
            let node = &self.nodes[i];
            stats.depth = stats.depth.max(depth);
            if node.is_leaf() {
                stats.leaves += 1;
                stats.largest_leaf = stats.largest_leaf.max(node.triangle_count as usize);
            } else {
                stack.push((node.second_child_offset as usize, depth + 1));
                stack.push((i + 1, depth + 1));
            }
        }
        stats
    }
}
