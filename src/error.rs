//! Error types for scene import and BVH construction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Triangle refers to a transform slot past the end of the table
    #[error("triangle {triangle} uses transform {transform}, but the table has {count} entries")]
    TransformOutOfRange {
        triangle: usize,
        transform: u32,
        count: usize,
    },

    /// Triangle refers to a vertex past the end of the vertex array
    #[error("triangle {triangle} uses vertex {vertex}, but there are {count} vertices")]
    VertexOutOfRange {
        triangle: usize,
        vertex: u32,
        count: usize,
    },

    /// Offsets and counts are stored as `u32` on the device
    #[error("{what} count {count} does not fit the 32-bit device layout")]
    TooLarge { what: &'static str, count: usize },

    /// Material referenced by a model is not declared
    #[error("model {model} uses material {material}, but only {count} are declared")]
    MaterialOutOfRange {
        model: String,
        material: u32,
        count: usize,
    },

    #[error("failed to load mesh {path}: {source}")]
    MeshLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("invalid scene description: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_indices() {
        let e = Error::TransformOutOfRange {
            triangle: 7,
            transform: 3,
            count: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("triangle 7"));
        assert!(msg.contains("transform 3"));
        assert!(msg.contains("2 entries"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
