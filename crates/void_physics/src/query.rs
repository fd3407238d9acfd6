//! Physics queries (overlap tests)

use crate::collider::ColliderHandle;
use crate::volume::OrientedBox;
use rapier3d::prelude as rapier;

/// A world that can answer "which colliders overlap this box?".
///
/// Trigger evaluation only needs this one capability, so it is kept as a
/// seam the physics world implements and tests can replace.
pub trait SpatialQuery {
    /// All colliders overlapping a world-space oriented box
    fn overlap_box(&self, volume: &OrientedBox) -> Vec<ColliderHandle>;
}

/// Query interface for physics world
pub struct PhysicsQuery<'a> {
    pub(crate) query_pipeline: &'a rapier::QueryPipeline,
    pub(crate) colliders: &'a rapier::ColliderSet,
    pub(crate) bodies: &'a rapier::RigidBodySet,
}

impl<'a> PhysicsQuery<'a> {
    /// Get all colliders that overlap an oriented box
    pub fn overlap_box(&self, volume: &OrientedBox) -> Vec<ColliderHandle> {
        let shape = volume.shape();
        let pos = volume.isometry();

        let mut results = Vec::new();

        self.query_pipeline.intersections_with_shape(
            self.bodies,
            self.colliders,
            &pos,
            shape.as_ref(),
            rapier::QueryFilter::new(),
            |handle| {
                results.push(ColliderHandle(handle));
                true // Continue
            },
        );

        results
    }
}
