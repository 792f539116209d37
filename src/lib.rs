//! Host-side BVH builder for a tiled GPU ray tracer.
//!
//! Scene geometry (vertices, indexed triangles, instance transforms) goes
//! in; a pointer-free, pre-order node array and the triangles in leaf order
//! come out, ready to be copied byte for byte into device buffers.
//!
//! ```text
//! SceneConfig -> SceneBuilder -> GeometrySnapshot -> Bvh -> device buffers
//! ```

pub mod bvh;
pub mod config;
mod error;
pub mod geometry;
pub mod scene;
pub use bvh::{Aabb, Bvh, LinearNode, Triangle};
pub use config::SceneConfig;
pub use error::{Error, Result};
pub use geometry::{GeometrySnapshot, Vertex};
pub use scene::Scene;
