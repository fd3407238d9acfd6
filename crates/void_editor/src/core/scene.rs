//! Editable scene of area owners.

use std::collections::BTreeMap;

use glam::Vec3;
use void_core::{IdGenerator, ObjectId};
use void_triggers::{Area, AreaTriggerMonitor, TriggerConfig};

use crate::viewport::GizmoSettings;

/// An object carrying an area monitor.
#[derive(Clone, Debug)]
pub struct AreaOwner {
    pub name: String,
    pub position: Vec3,
    /// Free-text tag shared by owners drawn together
    pub tag: String,
    pub gizmos: GizmoSettings,
    pub monitor: AreaTriggerMonitor,
}

impl AreaOwner {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            tag: String::new(),
            gizmos: GizmoSettings::default(),
            monitor: AreaTriggerMonitor::new(id),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.monitor.owner()
    }

    pub fn area(&self, index: usize) -> Option<&Area> {
        self.monitor.area(index)
    }

    pub fn area_mut(&mut self, index: usize) -> Option<&mut Area> {
        self.monitor.area_mut(index)
    }
}

/// All area owners known to the editor, plus the current selection.
#[derive(Default)]
pub struct AreaScene {
    owners: BTreeMap<ObjectId, AreaOwner>,
    ids: IdGenerator,
    selected: Option<ObjectId>,
}

impl AreaScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from monitor descriptions.
    ///
    /// Targets are left unset; the editor never polls.
    pub fn from_config(config: &TriggerConfig) -> Self {
        let mut scene = Self::new();
        for monitor in &config.monitors {
            let id = scene.ids.next();
            let mut owner = AreaOwner::new(id, monitor.name.clone());
            owner.position = monitor.position;
            owner.tag = monitor.tag.clone();
            owner.monitor = monitor.build(id, None);
            scene.owners.insert(id, owner);
        }
        log::info!("Loaded {} area owners into the editor", scene.owners.len());
        scene
    }

    /// Create an empty owner and return its id
    pub fn spawn(&mut self, name: impl Into<String>) -> ObjectId {
        let id = self.ids.next();
        self.owners.insert(id, AreaOwner::new(id, name));
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<AreaOwner> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.owners.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&AreaOwner> {
        self.owners.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut AreaOwner> {
        self.owners.get_mut(&id)
    }

    /// Look up an owner by name
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.owners
            .iter()
            .find(|(_, owner)| owner.name == name)
            .map(|(id, _)| *id)
    }

    pub fn owners(&self) -> impl Iterator<Item = (ObjectId, &AreaOwner)> {
        self.owners.iter().map(|(id, owner)| (*id, owner))
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.owners.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Select an owner. Unknown ids clear the selection.
    pub fn select(&mut self, id: ObjectId) {
        self.selected = self.owners.contains_key(&id).then_some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
[[monitors]]
name = "cave"
position = [1.0, 2.0, 3.0]
tag = "ambience"

[[monitors.areas]]
name = "mouth"
size = [4.0, 4.0, 4.0]

[[monitors]]
name = "forest"
"#;

    #[test]
    fn test_from_config() {
        let config = TriggerConfig::from_toml_str(SCENE).unwrap();
        let scene = AreaScene::from_config(&config);

        assert_eq!(scene.len(), 2);
        let cave = scene.find("cave").unwrap();
        let owner = scene.get(cave).unwrap();
        assert_eq!(owner.id(), cave);
        assert_eq!(owner.tag, "ambience");
        assert_eq!(owner.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(owner.area(0).unwrap().name, "mouth");
        assert!(owner.monitor.target().is_none());
    }

    #[test]
    fn test_selection() {
        let mut scene = AreaScene::new();
        let a = scene.spawn("a");
        scene.select(a);
        assert_eq!(scene.selected(), Some(a));

        scene.select(ObjectId::from_raw(42));
        assert_eq!(scene.selected(), None);

        scene.select(a);
        scene.remove(a);
        assert_eq!(scene.selected(), None);
        assert!(scene.is_empty());
    }
}
