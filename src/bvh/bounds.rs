use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// Inverted box; extending or joining it yields the other operand.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    // a, b are opposite corners
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let mut ret = Self::from_points(a, b);
        ret.extend(c);
        ret
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Axis of greatest extent (0 = x, 1 = y, 2 = z). Ties go to the
    /// lower axis, so a cube reports x and a flat xz-quad reports x.
    pub fn largest_axis(&self) -> usize {
        let d = self.extent();
        if d.x >= d.y && d.x >= d.z {
            0
        } else if d.y >= d.z {
            1
        } else {
            2
        }
    }
}

impl FromIterator<Vec3> for Aabb {
    fn from_iter<T: IntoIterator<Item = Vec3>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut acc, p| {
            acc.extend(p);
            acc
        })
    }
}

impl FromIterator<Aabb> for Aabb {
    fn from_iter<T: IntoIterator<Item = Aabb>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut acc, b| {
            acc.union(&b);
            acc
        })
    }
}

impl<'a> FromIterator<&'a Aabb> for Aabb {
    fn from_iter<T: IntoIterator<Item = &'a Aabb>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut acc, b| {
            acc.union(b);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_identity_for_union() {
        let b = Aabb::from_points(Vec3::new(-1.0, 2.0, 0.5), Vec3::new(3.0, -4.0, 1.0));
        let mut e = Aabb::EMPTY;
        e.union(&b);
        assert_eq!(e, b);
        let mut b2 = b;
        b2.union(&Aabb::EMPTY);
        assert_eq!(b2, b);
        assert!(Aabb::EMPTY.is_empty());
        assert!(!b.is_empty());
    }

    #[test]
    fn from_points_orders_corners() {
        let b = Aabb::from_points(Vec3::new(1.0, -1.0, 5.0), Vec3::new(-2.0, 3.0, 4.0));
        assert_eq!(b.min, Vec3::new(-2.0, -1.0, 4.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 5.0));
    }

    #[test]
    fn extend_is_order_independent_and_idempotent() {
        let pts = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-5.0, 4.0, 0.25),
        ];
        let forward: Aabb = pts.iter().copied().collect();
        let backward: Aabb = pts.iter().rev().copied().collect();
        assert_eq!(forward, backward);

        let mut again = forward;
        for p in pts {
            again.extend(p);
        }
        assert_eq!(again, forward);
    }

    #[test]
    fn triangle_bounds() {
        let b = Aabb::from_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(b.centroid(), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn largest_axis_picks_greatest_extent() {
        let b = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(b.largest_axis(), 1);
        let b = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 2.0, 7.0));
        assert_eq!(b.largest_axis(), 2);
    }

    #[test]
    fn largest_axis_tie_break_prefers_x_then_y() {
        let cube = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        assert_eq!(cube.largest_axis(), 0);
        let xy = Aabb::from_points(Vec3::ZERO, Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(xy.largest_axis(), 0);
        let xz = Aabb::from_points(Vec3::ZERO, Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(xz.largest_axis(), 0);
        let yz = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(yz.largest_axis(), 1);
        let point = Aabb::from_points(Vec3::ONE, Vec3::ONE);
        assert_eq!(point.largest_axis(), 0);
    }
}
