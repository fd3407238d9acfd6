//! # void_core - Void Engine Core
//!
//! Zero-dependency identifiers shared by the physics, audio and trigger
//! crates. An [`ObjectId`] names an engine object (the owner of an area
//! monitor, the target it tracks, the game object an audio event is posted
//! on) without borrowing it.

pub mod id;

pub use id::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::id::{fnv1_32, IdGenerator, ObjectId};
}
