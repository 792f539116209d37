use glam::{Mat4, Vec3};
use serde::Deserialize;

/// Placement of a model instance in world space.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub translate: Vec3,
    pub rotate_degrees: f32,
    pub rotate_axis: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            rotate_degrees: 0.0,
            rotate_axis: Vec3::Y,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Composes `scale * rotate * translate`, so points are translated
    /// first, then rotated, then scaled.
    pub fn matrix(&self) -> Mat4 {
        let rotation = match self.rotate_axis.try_normalize() {
            Some(axis) if self.rotate_degrees != 0.0 => {
                Mat4::from_axis_angle(axis, self.rotate_degrees.to_radians())
            }
            _ => Mat4::IDENTITY,
        };
        Mat4::from_scale(self.scale) * rotation * Mat4::from_translation(self.translate)
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_happens_before_scale() {
        let t = Transform {
            translate: Vec3::new(0.0, -1.5, -1.5),
            scale: Vec3::splat(0.4),
            ..Default::default()
        };
        let p = t.matrix().transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert!(p.abs_diff_eq(Vec3::new(0.4, -0.2, -0.2), 1e-6));
    }

    #[test]
    fn rotation_about_y() {
        let t = Transform {
            rotate_degrees: 90.0,
            rotate_axis: Vec3::new(0.0, 2.0, 0.0),
            ..Default::default()
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn zero_axis_skips_rotation() {
        let t = Transform {
            rotate_degrees: 45.0,
            rotate_axis: Vec3::ZERO,
            ..Default::default()
        };
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }
}
