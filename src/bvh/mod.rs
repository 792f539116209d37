mod bounds;
mod build;
mod flatten;
mod info;
mod node;
mod tree;
mod triangle;
pub use bounds::Aabb;
pub use build::{BuildNode, BuildTree, NodeId};
pub use info::TriangleBoundsInfo;
pub use node::LinearNode;
pub use tree::{Bvh, BvhStats};
pub use triangle::Triangle;
