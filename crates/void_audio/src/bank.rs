//! Event bank: which clip each event plays

use crate::error::AudioError;
use crate::event::AudioEvent;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Description of one audio event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDesc {
    /// Event name
    pub name: String,
    /// Clip path, relative to the bank's base path
    pub clip: String,
    /// Volume (0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Whether the clip loops until stopped
    #[serde(default)]
    pub looping: bool,
}

fn default_volume() -> f32 {
    1.0
}

impl EventDesc {
    /// Create an event description
    pub fn new(name: impl Into<String>, clip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clip: clip.into(),
            volume: 1.0,
            looping: false,
        }
    }

    /// Set volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Enable looping
    pub fn with_looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Handle for this event
    pub fn event(&self) -> AudioEvent {
        AudioEvent::new(self.name.clone())
    }
}

/// A set of event descriptions, usually loaded from TOML
///
/// ```toml
/// base_path = "assets/audio"
///
/// [[events]]
/// name = "Play_Cave_Ambience"
/// clip = "cave.ogg"
/// looping = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBank {
    /// Base path for clip files
    #[serde(default)]
    pub base_path: String,
    /// Event descriptions
    #[serde(default)]
    pub events: Vec<EventDesc>,
}

impl EventBank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bank from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, AudioError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a bank from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let bank = Self::from_toml_str(&text)?;
        log::info!("Loaded {} audio events from {:?}", bank.events.len(), path);
        Ok(bank)
    }

    /// Set base path
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Add an event description
    pub fn with_event(mut self, desc: EventDesc) -> Self {
        self.events.push(desc);
        self
    }

    /// Look up the description of an event
    pub fn get(&self, event: &AudioEvent) -> Option<&EventDesc> {
        self.events
            .iter()
            .find(|desc| AudioEvent::new(desc.name.as_str()).id() == event.id())
    }

    /// Resolve an event by name, failing if the bank does not describe it
    pub fn event(&self, name: &str) -> Result<AudioEvent, AudioError> {
        self.events
            .iter()
            .find(|desc| desc.name == name)
            .map(EventDesc::event)
            .ok_or_else(|| AudioError::UnknownEvent(name.to_string()))
    }

    /// Full path of an event's clip
    pub fn resolve_clip(&self, desc: &EventDesc) -> PathBuf {
        let clip = Path::new(&desc.clip);
        if self.base_path.is_empty() || clip.is_absolute() {
            clip.to_path_buf()
        } else {
            Path::new(&self.base_path).join(clip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"
        base_path = "assets/audio"

        [[events]]
        name = "Play_Cave_Ambience"
        clip = "cave.ogg"
        looping = true

        [[events]]
        name = "Play_Door"
        clip = "/abs/door.wav"
        volume = 0.5
    "#;

    #[test]
    fn test_parse_bank() {
        let bank = EventBank::from_toml_str(BANK).unwrap();
        assert_eq!(bank.events.len(), 2);

        let cave = &bank.events[0];
        assert!(cave.looping);
        assert_eq!(cave.volume, 1.0);
        assert_eq!(bank.events[1].volume, 0.5);
    }

    #[test]
    fn test_lookup_and_resolve() {
        let bank = EventBank::from_toml_str(BANK).unwrap();

        let cave = bank.event("Play_Cave_Ambience").unwrap();
        let desc = bank.get(&cave).unwrap();
        assert_eq!(bank.resolve_clip(desc), Path::new("assets/audio").join("cave.ogg"));

        let door = bank.get(&AudioEvent::new("Play_Door")).unwrap();
        assert_eq!(bank.resolve_clip(door), PathBuf::from("/abs/door.wav"));
    }

    #[test]
    fn test_unknown_event() {
        let bank = EventBank::new().with_event(EventDesc::new("Play_A", "a.wav"));
        assert!(matches!(bank.event("Play_B"), Err(AudioError::UnknownEvent(name)) if name == "Play_B"));
        assert!(bank.get(&AudioEvent::new("Play_B")).is_none());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(EventBank::from_toml_str("events = 3"), Err(AudioError::Parse(_))));
    }
}
