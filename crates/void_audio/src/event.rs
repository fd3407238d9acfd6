//! Audio event handles

use serde::{Deserialize, Serialize};
use std::fmt;
use void_core::fnv1_32;

/// A named audio event.
///
/// Events are passive references: holding one allocates nothing in the
/// audio backend. Two events with the same name are the same event.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AudioEvent {
    name: String,
    id: u32,
}

impl AudioEvent {
    /// Create an event handle from its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = fnv1_32(&name);
        Self { name, id }
    }

    /// Event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short id (hash of the name)
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl From<String> for AudioEvent {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for AudioEvent {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<AudioEvent> for String {
    fn from(event: AudioEvent) -> Self {
        event.name
    }
}

impl fmt::Debug for AudioEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AudioEvent({:?}, {:#010x})", self.name, self.id)
    }
}

impl fmt::Display for AudioEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Handle to one playing instance of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayingId(pub u32);

impl PlayingId {
    /// Returned when posting started nothing
    pub const INVALID: PlayingId = PlayingId(0);

    /// Check if this id refers to a started instance
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_event() {
        let a = AudioEvent::new("Play_Footsteps");
        let b = AudioEvent::from("Play_Footsteps");
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), AudioEvent::new("Stop_Footsteps").id());
    }

    #[test]
    fn test_id_ignores_case() {
        let a = AudioEvent::new("Play_Footsteps");
        let b = AudioEvent::new("PLAY_FOOTSTEPS");
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id(), fnv1_32("play_footsteps"));
    }

    #[test]
    fn test_event_serializes_as_name() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            event: AudioEvent,
        }

        let holder: Holder = toml::from_str(r#"event = "Play_Wind""#).unwrap();
        assert_eq!(holder.event.name(), "Play_Wind");

        let text = toml::to_string(&holder).unwrap();
        assert!(text.contains(r#"event = "Play_Wind""#));
    }

    #[test]
    fn test_invalid_playing_id() {
        assert!(!PlayingId::INVALID.is_valid());
        assert!(PlayingId(3).is_valid());
    }
}
