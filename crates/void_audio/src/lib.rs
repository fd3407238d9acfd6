//! Void Audio - Audio Event Dispatch
//!
//! This crate provides named audio events that gameplay code posts on
//! engine objects, in the style of audio middleware: an [`AudioEvent`] is a
//! passive handle, and an [`AudioEventDispatcher`] decides what posting or
//! stopping it actually does.
//!
//! # Features
//!
//! - Event handles with stable 32-bit ids derived from their names
//! - Event bank describing which clip each event plays
//! - Logging dispatcher for headless runs
//! - Rodio playback backend (`playback` feature)
//!
//! # Example
//!
//! ```ignore
//! use void_audio::prelude::*;
//!
//! let bank = EventBank::load("audio/events.toml")?;
//! let mut audio = RodioDispatcher::new(bank)?;
//!
//! let ambience = AudioEvent::new("Play_Cave_Ambience");
//! let id = audio.post(&ambience, owner);
//! audio.stop(&ambience, owner);
//! ```

pub mod bank;
pub mod dispatcher;
pub mod error;
pub mod event;
#[cfg(feature = "playback")]
pub mod playback;

pub mod prelude {
    pub use crate::bank::{EventBank, EventDesc};
    pub use crate::dispatcher::{AudioEventDispatcher, LogDispatcher};
    pub use crate::error::AudioError;
    pub use crate::event::{AudioEvent, PlayingId};
    #[cfg(feature = "playback")]
    pub use crate::playback::RodioDispatcher;
}

pub use prelude::*;
