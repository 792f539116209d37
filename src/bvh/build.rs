//! Median-split partitioner.
//!
//! Builds a binary tree over the triangle infos into an arena of
//! [`BuildNode`]s and, as a side effect, the triangle list in the order
//! leaves reference it. The tree only lives until it is flattened.

use std::ops::Index;

use super::{Aabb, Triangle, TriangleBoundsInfo};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuildNode {
    Leaf {
        bounds: Aabb,
        first_triangle_offset: u32,
        triangle_count: u32,
    },
    Interior {
        bounds: Aabb,
        split_axis: u32,
        children: [NodeId; 2],
    },
}

impl BuildNode {
    pub fn bounds(&self) -> Aabb {
        match self {
            BuildNode::Leaf { bounds, .. } => *bounds,
            BuildNode::Interior { bounds, .. } => *bounds,
        }
    }
}

#[derive(Debug, Default)]
pub struct BuildTree {
    nodes: Vec<BuildNode>,
    root: Option<NodeId>,
    ordered_triangles: Vec<Triangle>,
}

impl BuildTree {
    /// `None` for an empty scene.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ordered_triangles(&self) -> &[Triangle] {
        &self.ordered_triangles
    }

    pub fn into_ordered_triangles(self) -> Vec<Triangle> {
        self.ordered_triangles
    }
}

impl Index<NodeId> for BuildTree {
    type Output = BuildNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.get()]
    }
}

/// Partitions `infos` (reordering it in place) and returns the tree.
/// `triangles` is the input triangle array the infos index into.
///
/// Node ids are `u32`, so `infos` holds at most `2^31` entries;
/// [`GeometrySnapshot::validate`](crate::GeometrySnapshot::validate)
/// rejects anything larger.
pub fn build(infos: &mut [TriangleBoundsInfo], triangles: &[Triangle]) -> BuildTree {
    let mut partitioner = Partitioner {
        triangles,
        nodes: Vec::with_capacity(2 * infos.len()),
        ordered_triangles: Vec::with_capacity(infos.len()),
    };
    let root = if infos.is_empty() {
        None
    } else {
        Some(partitioner.build(infos, 0, infos.len()))
    };
    BuildTree {
        nodes: partitioner.nodes,
        root,
        ordered_triangles: partitioner.ordered_triangles,
    }
}

struct Partitioner<'a> {
    triangles: &'a [Triangle],
    nodes: Vec<BuildNode>,
    ordered_triangles: Vec<Triangle>,
}

impl Partitioner<'_> {
    fn push(&mut self, node: BuildNode) -> NodeId {
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        self.nodes.push(node);
        NodeId((self.nodes.len() - 1) as u32)
    }

    fn build(&mut self, infos: &mut [TriangleBoundsInfo], start: usize, end: usize) -> NodeId {
        let range = &infos[start..end];
        let bounds: Aabb = range.iter().map(|info| &info.world_bounds).collect();

        if range.len() == 1 {
            return self.leaf(range, bounds);
        }

        let centroid_bounds: Aabb = range.iter().map(|info| info.centroid).collect();
        let axis = centroid_bounds.largest_axis();

        // every centroid in one spot: no split can separate them
        if centroid_bounds.min[axis] == centroid_bounds.max[axis] {
            return self.leaf(range, bounds);
        }

        let mid = (start + end) / 2;
        infos[start..end].select_nth_unstable_by(mid - start, |a, b| {
            a.centroid[axis].total_cmp(&b.centroid[axis])
        });

        let left = self.build(infos, start, mid);
        let right = self.build(infos, mid, end);
        self.push(BuildNode::Interior {
            bounds,
            split_axis: axis as u32,
            children: [left, right],
        })
    }

    fn leaf(&mut self, range: &[TriangleBoundsInfo], bounds: Aabb) -> NodeId {
        let first_triangle_offset = self.ordered_triangles.len() as u32;
        let triangles = self.triangles;
        self.ordered_triangles
            .extend(range.iter().map(|info| triangles[info.triangle_index]));
        self.push(BuildNode::Leaf {
            bounds,
            first_triangle_offset,
            triangle_count: range.len() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    // Triangle `i` gets a unit-ish box centred on `c`.
    fn infos_at(centres: &[Vec3]) -> (Vec<TriangleBoundsInfo>, Vec<Triangle>) {
        let infos = centres
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                TriangleBoundsInfo::new(i, Aabb::from_points(c - Vec3::splat(0.5), c + Vec3::splat(0.5)))
            })
            .collect();
        let triangles = (0..centres.len() as u32)
            .map(|i| Triangle::new([3 * i, 3 * i + 1, 3 * i + 2], i, 0))
            .collect();
        (infos, triangles)
    }

    #[test]
    fn empty_input_has_no_root() {
        let tree = build(&mut [], &[]);
        assert!(tree.root().is_none());
        assert!(tree.is_empty());
        assert!(tree.ordered_triangles().is_empty());
    }

    #[test]
    fn single_triangle_is_a_leaf() {
        let (mut infos, tris) = infos_at(&[Vec3::ZERO]);
        let tree = build(&mut infos, &tris);
        let root = tree.root().unwrap();
        assert_eq!(
            tree[root],
            BuildNode::Leaf {
                bounds: Aabb::from_points(Vec3::splat(-0.5), Vec3::splat(0.5)),
                first_triangle_offset: 0,
                triangle_count: 1,
            }
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn two_triangles_split_along_x() {
        let (mut infos, tris) = infos_at(&[Vec3::new(10.0, 0.0, 0.0), Vec3::new(-10.0, 0.0, 0.0)]);
        let tree = build(&mut infos, &tris);
        let root = tree.root().unwrap();
        let BuildNode::Interior {
            split_axis,
            children: [left, right],
            ..
        } = tree[root]
        else {
            panic!("root should be interior");
        };
        assert_eq!(split_axis, 0);
        for child in [left, right] {
            assert!(matches!(tree[child], BuildNode::Leaf { triangle_count: 1, .. }));
        }
        // the lower centroid goes left
        assert!(tree[left].bounds().max.x < tree[right].bounds().min.x);
        assert_eq!(tree.ordered_triangles(), &[tris[1], tris[0]]);
    }

    #[test]
    fn coincident_centroids_form_one_leaf() {
        let (mut infos, tris) = infos_at(&[Vec3::ONE, Vec3::ONE, Vec3::ONE]);
        let tree = build(&mut infos, &tris);
        let root = tree.root().unwrap();
        assert!(matches!(
            tree[root],
            BuildNode::Leaf {
                first_triangle_offset: 0,
                triangle_count: 3,
                ..
            }
        ));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn median_split_halves_the_range() {
        let centres: Vec<Vec3> = [5.0, 1.0, 4.0, 0.0, 3.0, 2.0, 6.0]
            .iter()
            .map(|&x| Vec3::new(x, 0.0, 0.0))
            .collect();
        let (mut infos, tris) = infos_at(&centres);
        let tree = build(&mut infos, &tris);
        let root = tree.root().unwrap();
        let BuildNode::Interior {
            children: [left, right],
            ..
        } = tree[root]
        else {
            panic!("root should be interior");
        };
        // 7 / 2 = 3 triangles on the left: centroids 0, 1, 2
        assert!(tree[left].bounds().max.x <= 2.5);
        assert!(tree[right].bounds().min.x >= 2.5);
        // leaves are emitted left to right, so the order is sorted by x
        let materials: Vec<u32> = tree.ordered_triangles().iter().map(|t| t.material).collect();
        assert_eq!(materials, vec![3, 1, 5, 4, 2, 0, 6]);
    }

    #[test]
    fn splits_on_the_widest_centroid_axis() {
        let centres = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 8.0),
            Vec3::new(0.5, 0.0, 4.0),
            Vec3::new(0.2, 0.0, -3.0),
        ];
        let (mut infos, tris) = infos_at(&centres);
        let tree = build(&mut infos, &tris);
        let root = tree.root().unwrap();
        assert!(matches!(tree[root], BuildNode::Interior { split_axis: 2, .. }));
    }
}
