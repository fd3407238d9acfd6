//! Trigger configuration (TOML)

use crate::area::Area;
use crate::error::{Result, TriggerError};
use crate::monitor::AreaTriggerMonitor;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use void_audio::EventBank;
use void_core::ObjectId;
use void_physics::ColliderHandle;

/// Description of one area monitor
///
/// ```toml
/// [[monitors]]
/// name = "cave_entrance"
/// position = [0.0, 0.0, 0.0]
/// target = "player"
/// tag = "ambience"
///
/// [[monitors.areas]]
/// name = "mouth"
/// size = [6.0, 4.0, 3.0]
/// enter_event = "Play_Cave_Ambience"
/// stop_enter_event_on_exit = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Name of the owning object
    pub name: String,
    /// World position of the owner
    #[serde(default)]
    pub position: Vec3,
    /// Name of the tracked object
    #[serde(default)]
    pub target: Option<String>,
    /// Gizmo tag shared with other monitors
    #[serde(default)]
    pub tag: String,
    /// Areas
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl MonitorConfig {
    /// Create an empty monitor description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            target: None,
            tag: String::new(),
            areas: Vec::new(),
        }
    }

    /// Build the runtime monitor
    pub fn build(&self, owner: ObjectId, target: Option<ColliderHandle>) -> AreaTriggerMonitor {
        let mut monitor = AreaTriggerMonitor::new(owner).with_areas(self.areas.iter().cloned());
        monitor.set_target(target);
        monitor
    }

    /// Check that every referenced event is described in the bank
    pub fn validate_events(&self, bank: &EventBank) -> Result<()> {
        for area in &self.areas {
            for event in area.enter_event.iter().chain(area.exit_event.iter()) {
                if bank.get(event).is_none() {
                    return Err(TriggerError::UnknownEvent {
                        monitor: self.name.clone(),
                        area: area.name.clone(),
                        event: event.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A set of monitor descriptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Monitors
    #[serde(default)]
    pub monitors: Vec<MonitorConfig>,
}

impl TriggerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded {} area monitors from {:?}", config.monitors.len(), path);
        Ok(config)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Find a monitor by name
    pub fn monitor(&self, name: &str) -> Option<&MonitorConfig> {
        self.monitors.iter().find(|m| m.name == name)
    }

    /// Validate every monitor against an event bank
    pub fn validate_events(&self, bank: &EventBank) -> Result<()> {
        self.monitors.iter().try_for_each(|m| m.validate_events(bank))
    }
}
