//! Physics world - collider container

use crate::collider::{ColliderDesc, ColliderHandle};
use crate::error::{PhysicsError, Result};
use crate::query::{PhysicsQuery, SpatialQuery};
use crate::volume::OrientedBox;
use glam::Vec3;
use rapier3d::prelude as rapier;
use void_core::ObjectId;

/// The physics world holding every collider the queries can see.
///
/// The query pipeline is refreshed after every mutation, so queries always
/// see current collider poses.
pub struct PhysicsWorld {
    /// Query pipeline
    query_pipeline: rapier::QueryPipeline,

    /// Rigid body set (colliders here are free-standing; the set is required by queries)
    bodies: rapier::RigidBodySet,

    /// Collider set
    colliders: rapier::ColliderSet,
}

impl PhysicsWorld {
    /// Create an empty physics world
    pub fn new() -> Self {
        Self {
            query_pipeline: rapier::QueryPipeline::new(),
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
        }
    }

    // ==================== Colliders ====================

    /// Create a free-standing collider
    pub fn create_collider(&mut self, desc: ColliderDesc) -> ColliderHandle {
        let handle = ColliderHandle(self.colliders.insert(desc.to_rapier_builder()));
        self.sync_query_pipeline();
        handle
    }

    /// Create a collider tagged with its owning object
    pub fn create_collider_for_object(&mut self, object: ObjectId, mut desc: ColliderDesc) -> ColliderHandle {
        desc.user_data = object.to_user_data();
        let handle = self.create_collider(desc);
        log::debug!("Created collider {:?} for object {}", handle, object);
        handle
    }

    /// Move a collider
    pub fn set_collider_position(&mut self, handle: ColliderHandle, position: Vec3) -> Result<()> {
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(PhysicsError::ColliderNotFound(handle))?;
        collider.set_translation(rapier::Vector::new(position.x, position.y, position.z));
        self.sync_query_pipeline();
        Ok(())
    }

    // ==================== Queries ====================

    /// Rebuild the query acceleration structure from current collider poses
    fn sync_query_pipeline(&mut self) {
        self.query_pipeline.update(&self.colliders);
    }

    /// Get a query interface
    pub fn query(&self) -> PhysicsQuery<'_> {
        PhysicsQuery {
            query_pipeline: &self.query_pipeline,
            colliders: &self.colliders,
            bodies: &self.bodies,
        }
    }
}

impl SpatialQuery for PhysicsWorld {
    fn overlap_box(&self, volume: &OrientedBox) -> Vec<ColliderHandle> {
        self.query().overlap_box(volume)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::ColliderShape;
    use approx::assert_relative_eq;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn unit_box_at(center: Vec3) -> OrientedBox {
        OrientedBox::from_size(center, Vec3::splat(2.0), Quat::IDENTITY)
    }

    #[test]
    fn test_create_world() {
        let world = PhysicsWorld::new();
        assert!(world.overlap_box(&unit_box_at(Vec3::ZERO)).is_empty());
    }

    #[test]
    fn test_create_collider_for_object() {
        let mut world = PhysicsWorld::new();
        let object = ObjectId::from_raw(7);

        let handle = world.create_collider_for_object(object, ColliderDesc::new(ColliderShape::sphere(0.5)));

        let user_data = world.colliders.get(handle.0).map(|c| c.user_data);
        assert_eq!(user_data.map(ObjectId::from_user_data), Some(object));
    }

    #[test]
    fn test_overlap_box_hits_and_misses() {
        let mut world = PhysicsWorld::new();
        let target = world.create_collider(ColliderDesc::new(ColliderShape::sphere(0.25)));

        assert!(world.overlap_box(&unit_box_at(Vec3::ZERO)).contains(&target));

        world.set_collider_position(target, Vec3::new(5.0, 0.0, 0.0)).unwrap();
        assert!(!world.overlap_box(&unit_box_at(Vec3::ZERO)).contains(&target));
        assert!(world.overlap_box(&unit_box_at(Vec3::new(5.0, 0.0, 0.0))).contains(&target));
    }

    #[test]
    fn test_overlap_rotated_box() {
        let mut world = PhysicsWorld::new();
        let target = world.create_collider(
            ColliderDesc::new(ColliderShape::sphere(0.1)).with_position(Vec3::new(0.0, 0.0, 4.0)),
        );

        let along_x = OrientedBox::from_size(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0), Quat::IDENTITY);
        let along_z = OrientedBox::from_size(
            Vec3::ZERO,
            Vec3::new(10.0, 1.0, 1.0),
            Quat::from_rotation_y(FRAC_PI_2),
        );

        assert!(!world.overlap_box(&along_x).contains(&target));
        assert!(world.overlap_box(&along_z).contains(&target));
    }

    #[test]
    fn test_move_collider() {
        let mut world = PhysicsWorld::new();
        let handle = world.create_collider(ColliderDesc::new(ColliderShape::sphere(0.5)));

        world.set_collider_position(handle, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        let t = world.colliders.get(handle.0).map(|c| *c.translation()).unwrap();
        assert_relative_eq!(t.x, 1.0);
        assert_relative_eq!(t.y, 2.0);
        assert_relative_eq!(t.z, 3.0);
    }

    #[test]
    fn test_unknown_collider() {
        let mut other = PhysicsWorld::new();
        other.create_collider(ColliderDesc::new(ColliderShape::sphere(0.5)));
        let stale = other.create_collider(ColliderDesc::new(ColliderShape::sphere(0.5)));

        let mut world = PhysicsWorld::new();
        assert!(matches!(
            world.set_collider_position(stale, Vec3::ZERO),
            Err(PhysicsError::ColliderNotFound(_))
        ));
    }
}
