mod material;
mod mesh;
mod scene_builder;
mod snapshot;
mod transform;
mod vertex;
pub use material::Material;
pub use mesh::Mesh;
pub use scene_builder::SceneBuilder;
pub use snapshot::GeometrySnapshot;
pub use transform::Transform;
pub use vertex::Vertex;
