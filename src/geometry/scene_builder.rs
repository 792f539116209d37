use glam::Mat4;

use crate::bvh::Triangle;
use crate::error::{Error, Result};
use crate::geometry::{GeometrySnapshot, Mesh, Vertex};

/// Concatenates imported meshes into one snapshot.
///
/// Each mesh's indices are rebased onto the vertices already collected,
/// and every triangle is stamped with the caller's material and transform.
#[derive(Debug)]
pub struct SceneBuilder {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    transforms: Vec<Mat4>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            transforms: vec![Mat4::IDENTITY],
        }
    }

    /// Appends a transform and returns its slot.
    pub fn add_transform(&mut self, transform: Mat4) -> Result<u32> {
        let slot = u32::try_from(self.transforms.len()).map_err(|_| Error::TooLarge {
            what: "transform",
            count: self.transforms.len() + 1,
        })?;
        self.transforms.push(transform);
        Ok(slot)
    }

    /// Appends a mesh. Nothing is added if a rebased index would not fit
    /// a `u32`.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: u32, transform: u32) -> Result<&mut Self> {
        let offset = u32::try_from(self.vertices.len()).map_err(|_| Error::TooLarge {
            what: "vertex",
            count: self.vertices.len(),
        })?;
        let rebase = |i: u32| {
            i.checked_add(offset).ok_or(Error::TooLarge {
                what: "vertex",
                count: i as usize + offset as usize + 1,
            })
        };
        let triangles = mesh
            .indices
            .chunks_exact(3)
            .map(|t| Ok(Triangle::new([rebase(t[0])?, rebase(t[1])?, rebase(t[2])?], material, transform)))
            .collect::<Result<Vec<_>>>()?;
        self.vertices.extend_from_slice(&mesh.vertices);
        self.triangles.extend(triangles);
        Ok(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn finish(self) -> GeometrySnapshot {
        GeometrySnapshot::new(self.vertices, self.triangles, self.transforms)
    }
}
