use crate::error::{Error, Result};
use crate::geometry::Vertex;
use std::io::BufReader;
use std::path::Path;

/// Triangulated mesh as imported, with indices local to this mesh.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Parses OBJ source. Material libraries are ignored; materials are
    /// assigned per model by the caller.
    pub fn load_obj(source: &[u8]) -> Result<Self> {
        let mut reader = BufReader::new(source);
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &load_options(), |_matpath| {
                Err(tobj::LoadError::GenericFailure)
            })
            .map_err(|source| Error::MeshLoad {
                path: "<memory>".into(),
                source,
            })?;
        Self::from_models(models)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &load_options()).map_err(|source| Error::MeshLoad {
                path: path.to_path_buf(),
                source,
            })?;
        let mesh = Self::from_models(models)?;
        log::debug!(
            "loaded {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    // An OBJ file can hold several models; their indices are rebased so
    // the result is one mesh.
    fn from_models(models: Vec<tobj::Model>) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for model in models {
            let mesh = model.mesh;
            let offset = u32::try_from(vertices.len()).map_err(|_| Error::TooLarge {
                what: "vertex",
                count: vertices.len(),
            })?;
            for &i in &mesh.indices {
                let rebased = i.checked_add(offset).ok_or(Error::TooLarge {
                    what: "vertex",
                    count: i as usize + offset as usize + 1,
                })?;
                indices.push(rebased);
            }
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vertex::new([p[0], p[1], p[2]])),
            );
        }
        Ok(Self::new(vertices, indices))
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &[u8] = b"\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn quad_is_triangulated() {
        let mesh = Mesh::load_obj(QUAD).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.indices.iter().all(|&i| i < 4));
    }

    #[test]
    fn multiple_objects_are_rebased() {
        let src = b"\
o a
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o b
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
        let mesh = Mesh::load_obj(src).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        let mut seen = mesh.indices.clone();
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        let second = &mesh.indices[3..];
        assert!(second
            .iter()
            .all(|&i| mesh.vertices[i as usize].position.z == 1.0));
    }

    #[test]
    fn cube_fixture() {
        let mesh = Mesh::load_obj(include_bytes!("../../assets/cube.obj")).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn rebased_model_index_overflow_is_reported() {
        let model = |indices: Vec<u32>| {
            tobj::Model::new(
                tobj::Mesh {
                    positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                    indices,
                    ..Default::default()
                },
                String::new(),
            )
        };
        let err = Mesh::from_models(vec![model(vec![0, 1, 2]), model(vec![0, 1, u32::MAX])]).unwrap_err();
        assert!(matches!(err, Error::TooLarge { what: "vertex", .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Mesh::open("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, Error::MeshLoad { .. }));
    }
}
