use glam::{Mat4, Vec3};

use crate::bvh::Triangle;
use crate::error::{Error, Result};
use crate::geometry::Vertex;

/// Everything one BVH build reads: vertex positions, indexed triangles and
/// the instance transform table (slot 0 is the identity by convention).
#[derive(Debug, Default, Clone)]
pub struct GeometrySnapshot {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
    pub transforms: Vec<Mat4>,
}

impl GeometrySnapshot {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>, transforms: Vec<Mat4>) -> Self {
        Self {
            vertices,
            triangles,
            transforms,
        }
    }

    /// Checks every index a triangle carries. A bad index means the
    /// snapshot was assembled wrong, so nothing is clamped.
    ///
    /// Every transform index, 0 included, must name a slot in the table:
    /// the table is uploaded as is and the device reads it by index.
    pub fn validate(&self) -> Result<()> {
        check_counts(self.vertices.len(), self.triangles.len(), self.transforms.len())?;
        for (i, t) in self.triangles.iter().enumerate() {
            if let Some(&vertex) = t
                .indices()
                .iter()
                .find(|&&v| v as usize >= self.vertices.len())
            {
                return Err(Error::VertexOutOfRange {
                    triangle: i,
                    vertex,
                    count: self.vertices.len(),
                });
            }
            if t.transform as usize >= self.transforms.len() {
                return Err(Error::TransformOutOfRange {
                    triangle: i,
                    transform: t.transform,
                    count: self.transforms.len(),
                });
            }
        }
        if let Some(first) = self.transforms.first() {
            if *first != Mat4::IDENTITY {
                log::warn!("transform slot 0 is not the identity; the builder treats it as one");
            }
        }
        Ok(())
    }

    /// Matrix for a triangle's transform index. Index 0 is always the
    /// identity, whatever slot 0 holds: a non-identity slot 0 only gets a
    /// warning from [`validate`](Self::validate), and bounds are built as if
    /// it were the identity. Call after `validate`.
    pub fn transform(&self, index: u32) -> Mat4 {
        match index {
            0 => Mat4::IDENTITY,
            i => self.transforms[i as usize],
        }
    }

    /// The triangle's corners in world space. Call after
    /// [`validate`](Self::validate).
    pub fn world_positions(&self, triangle: &Triangle) -> [Vec3; 3] {
        let m = self.transform(triangle.transform);
        triangle
            .indices()
            .map(|v| m.transform_point3(self.vertices[v as usize].position))
    }
}

/// Every count must fit a `u32` index, and so must the `2n - 1` nodes a
/// tree over `n` triangles can grow to.
fn check_counts(vertices: usize, triangles: usize, transforms: usize) -> Result<()> {
    let nodes = triangles.saturating_mul(2).saturating_sub(1);
    for (what, count) in [
        ("vertex", vertices),
        ("triangle", triangles),
        ("node", nodes),
        ("transform", transforms),
    ] {
        if u32::try_from(count).is_err() {
            return Err(Error::TooLarge { what, count });
        }
    }
    Ok(())
}
