//! Void Engine Area Editor
//!
//! Design-time tooling for area monitors, without a rendering backend.
//!
//! ## Features
//!
//! - **Wireframes**: world-space boxes for every visible area
//! - **Tag Filtering**: owners sharing a tag are drawn together
//! - **Handles**: translate/rotate/scale, each toggled per owner
//! - **Undo/Redo**: command history with drag merging
//!
//! ## Architecture
//!
//! ```text
//! Handle drag → HandleEdit → Command → AreaScene
//! ```
//!
//! All modifications go through the command system for undo/redo support.

pub mod commands;
pub mod core;
pub mod editor;
pub mod viewport;

// Re-export commonly used types
pub use core::{AreaOwner, AreaScene, UndoHistory};

pub use commands::{Command, CommandError, CommandResult};

pub use editor::{AreaEditor, HandleEdit};

pub use viewport::{GizmoSettings, HandleKind, HandlePlacement, WireBox};

/// Editor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
