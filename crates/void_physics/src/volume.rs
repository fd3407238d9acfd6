//! Oriented box volumes

use crate::collider::to_rapier_rotation;
use glam::{Quat, Vec3};
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

/// A box with arbitrary position, orientation and extents, in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Center of the box
    pub center: Vec3,
    /// Half-extents along the box's local axes
    pub half_extents: Vec3,
    /// Orientation of the box's local axes
    pub rotation: Quat,
}

impl OrientedBox {
    /// Edges as pairs of indices into [`OrientedBox::corners`].
    pub const EDGES: [(usize, usize); 12] = [
        // X-aligned
        (0, 1),
        (2, 3),
        (4, 5),
        (6, 7),
        // Y-aligned
        (0, 2),
        (1, 3),
        (4, 6),
        (5, 7),
        // Z-aligned
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Create a box from its center, half-extents and rotation.
    ///
    /// The rotation is normalized; a zero-length or non-finite rotation
    /// becomes the identity.
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation: normalize_rotation(rotation),
        }
    }

    /// Create a box from its full size (negative components are mirrored)
    pub fn from_size(center: Vec3, size: Vec3, rotation: Quat) -> Self {
        Self::new(center, size * 0.5, rotation)
    }

    /// Transform a world-space point into the box's local frame
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.center)
    }

    /// Check if a world-space point is inside the box (boundary included)
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.to_local(point).abs().cmple(self.half_extents).all()
    }

    /// The eight corners in world space.
    ///
    /// Bit 0 of the index selects +X, bit 1 +Y and bit 2 +Z.
    pub fn corners(&self) -> [Vec3; 8] {
        let h = self.half_extents;
        std::array::from_fn(|i| {
            let local = Vec3::new(
                if i & 1 != 0 { h.x } else { -h.x },
                if i & 2 != 0 { h.y } else { -h.y },
                if i & 4 != 0 { h.z } else { -h.z },
            );
            self.center + self.rotation * local
        })
    }

    /// The twelve edges as world-space line segments
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let corners = self.corners();
        Self::EDGES.map(|(a, b)| (corners[a], corners[b]))
    }

    /// Rapier pose of the box
    pub(crate) fn isometry(&self) -> rapier::Isometry<f32> {
        rapier::Isometry::from_parts(
            rapier::Translation::new(self.center.x, self.center.y, self.center.z),
            to_rapier_rotation(self.rotation),
        )
    }

    /// Rapier shape of the box
    pub(crate) fn shape(&self) -> rapier::SharedShape {
        rapier::SharedShape::cuboid(self.half_extents.x, self.half_extents.y, self.half_extents.z)
    }
}

fn normalize_rotation(rotation: Quat) -> Quat {
    let length = rotation.length();
    if length.is_finite() && length > f32::EPSILON {
        rotation / length
    } else {
        Quat::IDENTITY
    }
}

impl Default for OrientedBox {
    fn default() -> Self {
        Self::from_size(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_box_contains() {
        let volume = OrientedBox::from_size(Vec3::ZERO, Vec3::splat(2.0), Quat::IDENTITY);

        assert!(volume.contains_point(Vec3::ZERO));
        assert!(volume.contains_point(Vec3::new(0.9, 0.9, 0.9)));
        assert!(volume.contains_point(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!volume.contains_point(Vec3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_rotated_box_contains() {
        // Long along X before rotation, long along Z after a quarter turn about Y
        let volume = OrientedBox::from_size(
            Vec3::ZERO,
            Vec3::new(10.0, 1.0, 1.0),
            Quat::from_rotation_y(FRAC_PI_2),
        );

        assert!(volume.contains_point(Vec3::new(0.0, 0.0, 4.0)));
        assert!(!volume.contains_point(Vec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn test_negative_size_is_mirrored() {
        let volume = OrientedBox::from_size(Vec3::ZERO, Vec3::new(-2.0, 2.0, 2.0), Quat::IDENTITY);
        assert_eq!(volume.half_extents, Vec3::ONE);
        assert!(volume.contains_point(Vec3::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_is_normalized() {
        let scaled = OrientedBox::from_size(Vec3::ZERO, Vec3::splat(2.0), Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));
        let identity = OrientedBox::from_size(Vec3::ZERO, Vec3::splat(2.0), Quat::IDENTITY);

        assert_eq!(scaled.rotation, Quat::IDENTITY);
        assert_eq!(scaled.corners(), identity.corners());
        assert!(!scaled.contains_point(Vec3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_zero_rotation_falls_back_to_identity() {
        let volume = OrientedBox::from_size(Vec3::ZERO, Vec3::splat(2.0), Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));

        assert_eq!(volume.rotation, Quat::IDENTITY);
        assert!(volume.contains_point(Vec3::ZERO));
        assert!(volume.corners().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_corners_and_edges() {
        let volume = OrientedBox::from_size(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0), Quat::IDENTITY);
        let corners = volume.corners();

        assert_eq!(corners[0], Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(corners[7], Vec3::new(2.0, 1.0, 1.0));

        for (a, b) in volume.edges() {
            assert_relative_eq!(a.distance(b), 2.0, epsilon = 1e-5);
        }
    }
}
