//! Walkthrough scene file

use glam::Vec3;
use serde::Deserialize;
use std::path::Path;
use void_audio::{EventBank, EventDesc};
use void_physics::ColliderShape;
use void_triggers::{MonitorConfig, TriggerConfig};

/// The bundled scene, used when no path is given
pub const BUNDLED: &str = include_str!("../scene.toml");

fn default_steps() -> u32 {
    4
}

/// The object walking through the areas
#[derive(Debug, Clone, Deserialize)]
pub struct TargetDesc {
    pub name: String,
    #[serde(default)]
    pub shape: ColliderShape,
    pub waypoints: Vec<Vec3>,
}

/// A scene: one moving target, the monitors watching it and their events
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Frames spent between two waypoints
    #[serde(default = "default_steps")]
    pub steps_per_leg: u32,
    pub target: TargetDesc,
    #[serde(default)]
    pub events: Vec<EventDesc>,
    #[serde(default)]
    pub monitors: Vec<MonitorConfig>,
}

impl Scene {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn bank(&self) -> EventBank {
        self.events
            .iter()
            .cloned()
            .fold(EventBank::new(), |bank, desc| bank.with_event(desc))
    }

    pub fn triggers(&self) -> TriggerConfig {
        TriggerConfig {
            monitors: self.monitors.clone(),
        }
    }

    /// Target positions, one per frame, starting at the first waypoint
    pub fn path(&self) -> Vec<Vec3> {
        let mut points: Vec<Vec3> = self.target.waypoints.first().copied().into_iter().collect();
        let steps = self.steps_per_leg.max(1);
        for leg in self.target.waypoints.windows(2) {
            for step in 1..=steps {
                points.push(leg[0].lerp(leg[1], step as f32 / steps as f32));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_scene_parses() {
        let scene = Scene::from_toml_str(BUNDLED).unwrap();
        assert_eq!(scene.target.name, "player");
        assert_eq!(scene.monitors.len(), 2);
        scene.triggers().validate_events(&scene.bank()).unwrap();
    }

    #[test]
    fn test_path_interpolates_legs() {
        let scene = Scene::from_toml_str(
            r#"
steps_per_leg = 2
[target]
name = "t"
waypoints = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]]
"#,
        )
        .unwrap();

        assert_eq!(
            scene.path(),
            vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0)]
        );
    }
}
