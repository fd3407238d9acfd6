//! Void Triggers - Area Trigger Monitors
//!
//! This crate provides area monitors: a component owning a handful of
//! oriented boxes placed relative to its owner, which posts audio events
//! when a tracked target enters or leaves any of them.
//!
//! # Features
//!
//! - Oriented box areas with per-area enter/exit events
//! - Stop-on-exit and optional exit events
//! - Per-area debug messages
//! - A system that polls every registered monitor once per frame
//! - TOML configuration
//!
//! # Example
//!
//! ```ignore
//! use void_triggers::prelude::*;
//!
//! let mut monitor = AreaTriggerMonitor::new(owner)
//!     .with_target(player_collider)
//!     .with_area(
//!         Area::new("cave")
//!             .with_size(Vec3::new(8.0, 4.0, 8.0))
//!             .with_enter_event("Play_Cave_Ambience")
//!             .stop_enter_event_on_exit(true),
//!     );
//!
//! // Once per frame
//! let transitions = monitor.poll(owner_position, &physics, &mut audio, &mut LogSink);
//! ```

pub mod area;
pub mod config;
pub mod debug;
pub mod error;
pub mod events;
pub mod monitor;
pub mod system;

pub mod prelude {
    pub use crate::area::Area;
    pub use crate::config::{MonitorConfig, TriggerConfig};
    pub use crate::debug::{DebugSink, LogSink};
    pub use crate::error::{Result, TriggerError};
    pub use crate::events::{AreaTransition, TransitionHandler, TransitionKind};
    pub use crate::monitor::AreaTriggerMonitor;
    pub use crate::system::AreaTriggerSystem;
}

pub use prelude::*;
