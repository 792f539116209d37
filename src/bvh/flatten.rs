//! Pre-order serialization of the build tree.
//!
//! A node is written before its children, so its left subtree is the
//! contiguous block right after it and a traverser can skip the whole
//! subtree by jumping to `second_child_offset`.

use super::{BuildNode, BuildTree, LinearNode, NodeId};

pub fn flatten(tree: &BuildTree) -> Vec<LinearNode> {
    let mut nodes = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        flatten_node(tree, root, &mut nodes);
    }
    nodes
}

fn flatten_node(tree: &BuildTree, id: NodeId, out: &mut Vec<LinearNode>) -> u32 {
    let index = out.len();
    match tree[id] {
        BuildNode::Leaf {
            bounds,
            first_triangle_offset,
            triangle_count,
        } => {
            out.push(LinearNode::new_leaf(bounds, first_triangle_offset, triangle_count));
        }
        BuildNode::Interior {
            bounds,
            split_axis,
            children: [left, right],
        } => {
            out.push(LinearNode::new_interior(bounds, split_axis));
            let left_index = flatten_node(tree, left, out);
            debug_assert_eq!(left_index as usize, index + 1);
            out[index].second_child_offset = flatten_node(tree, right, out);
        }
    }
    index as u32
}
