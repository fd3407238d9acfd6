//! Void Physics - Rapier 3D Integration
//!
//! This crate provides the collision side of the Void Engine physics layer:
//! a world of colliders owned by engine objects, and the shape queries the
//! trigger systems run against it.
//!
//! # Features
//!
//! - Colliders with various shapes, attached to engine objects
//! - Oriented box volumes with analytic containment and wireframe data
//! - Overlap queries ("which colliders touch this box?")
//!
//! # Example
//!
//! ```ignore
//! use void_physics::prelude::*;
//! use glam::{Quat, Vec3};
//!
//! let mut physics = PhysicsWorld::new();
//! let player = physics.create_collider_for_object(
//!     player_id,
//!     ColliderDesc::new(ColliderShape::sphere(0.5)),
//! );
//!
//! let volume = OrientedBox::from_size(Vec3::ZERO, Vec3::splat(2.0), Quat::IDENTITY);
//! let hits = physics.overlap_box(&volume);
//! assert!(hits.contains(&player));
//! ```

pub mod collider;
pub mod error;
pub mod query;
pub mod volume;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::collider::{ColliderDesc, ColliderHandle, ColliderShape};
    pub use crate::error::{PhysicsError, Result};
    pub use crate::query::{PhysicsQuery, SpatialQuery};
    pub use crate::volume::OrientedBox;
    pub use crate::world::PhysicsWorld;
}

pub use prelude::*;
