//! Wireframe boxes and handle placement for area owners.
//!
//! Nothing here renders; the host draws the line segments and handles
//! this module produces.

use glam::{Quat, Vec3};
use void_core::ObjectId;
use void_physics::OrientedBox;

use super::HandleKind;
use crate::core::AreaScene;

/// One area's world-space box, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct WireBox {
    pub owner: ObjectId,
    pub area_index: usize,
    pub label: String,
    pub volume: OrientedBox,
    /// Target was inside on the last poll
    pub inside: bool,
}

impl WireBox {
    pub fn corners(&self) -> [Vec3; 8] {
        self.volume.corners()
    }

    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        self.volume.edges()
    }
}

/// A manipulation handle anchored at an area's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePlacement {
    pub owner: ObjectId,
    pub area_index: usize,
    pub kind: HandleKind,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Owners whose areas are drawn while `selected` is selected.
///
/// The selected owner's "show all" flag draws everyone. Otherwise an empty
/// tag draws only the selected owner, and a non-empty tag draws every owner
/// carrying the same tag.
pub fn visible_owners(scene: &AreaScene, selected: ObjectId) -> Vec<ObjectId> {
    let Some(current) = scene.get(selected) else {
        return Vec::new();
    };

    if current.gizmos.show_all {
        return scene.ids().collect();
    }

    if current.tag.is_empty() {
        return vec![selected];
    }

    scene
        .owners()
        .filter(|(_, owner)| owner.tag == current.tag)
        .map(|(id, _)| id)
        .collect()
}

/// Wire boxes of every visible owner
pub fn draw_list(scene: &AreaScene, selected: ObjectId) -> Vec<WireBox> {
    let mut boxes = Vec::new();
    for id in visible_owners(scene, selected) {
        let Some(owner) = scene.get(id) else { continue };
        for (index, area) in owner.monitor.areas().iter().enumerate() {
            boxes.push(WireBox {
                owner: id,
                area_index: index,
                label: area.name.clone(),
                volume: area.world_box(owner.position),
                inside: area.is_inside(),
            });
        }
    }
    boxes
}

/// Visible handles of the selected owner's areas
pub fn handles(scene: &AreaScene, selected: ObjectId) -> Vec<HandlePlacement> {
    let Some(owner) = scene.get(selected) else {
        return Vec::new();
    };

    let mut placements = Vec::new();
    for (index, area) in owner.monitor.areas().iter().enumerate() {
        let world_box = area.world_box(owner.position);
        for kind in owner.gizmos.visible_handles() {
            placements.push(HandlePlacement {
                owner: selected,
                area_index: index,
                kind,
                position: world_box.center,
                rotation: match kind {
                    HandleKind::Translate => Quat::IDENTITY,
                    HandleKind::Rotate | HandleKind::Scale => world_box.rotation,
                },
            });
        }
    }
    placements
}
