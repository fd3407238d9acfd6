//! Area edit commands (move, rotate, resize, add, remove).

use glam::{Quat, Vec3};
use std::any::Any;
use void_core::ObjectId;
use void_triggers::Area;

use super::command::area_mut;
use super::{Command, CommandError, CommandResult};
use crate::core::AreaScene;
use crate::viewport::HandleKind;

macro_rules! area_property_command {
    ($(#[$doc:meta])* $name:ident, $field:ident, $ty:ty, $description:literal, $handle:expr) => {
        $(#[$doc])*
        pub struct $name {
            pub owner: ObjectId,
            pub area_index: usize,
            pub value: $ty,
            old_value: Option<$ty>,
        }

        impl $name {
            pub fn new(owner: ObjectId, area_index: usize, value: $ty) -> Self {
                Self {
                    owner,
                    area_index,
                    value,
                    old_value: None,
                }
            }

            /// Handle that produces this edit
            pub fn handle(&self) -> HandleKind {
                $handle
            }

            /// Value restored by undo, once executed
            pub fn old_value(&self) -> Option<$ty> {
                self.old_value
            }
        }

        impl Command for $name {
            fn description(&self) -> &str {
                $description
            }

            fn execute(&mut self, scene: &mut AreaScene) -> CommandResult {
                let area = area_mut(scene, self.owner, self.area_index)?;
                if self.old_value.is_none() {
                    self.old_value = Some(area.$field);
                }
                area.$field = self.value;
                Ok(())
            }

            fn undo(&mut self, scene: &mut AreaScene) -> CommandResult {
                if let Some(old) = self.old_value {
                    area_mut(scene, self.owner, self.area_index)?.$field = old;
                }
                Ok(())
            }

            fn can_merge(&self, other: &dyn Command) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .map_or(false, |o| o.owner == self.owner && o.area_index == self.area_index)
            }

            fn merge(&mut self, previous: &dyn Command) {
                if let Some(previous) = previous.as_any().downcast_ref::<Self>() {
                    if previous.old_value.is_some() {
                        self.old_value = previous.old_value;
                    }
                }
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

area_property_command!(
    /// Move an area's center relative to its owner.
    SetAreaCenterCommand,
    center,
    Vec3,
    "Move Area",
    HandleKind::Translate
);

area_property_command!(
    /// Set an area's rotation.
    SetAreaRotationCommand,
    rotation,
    Quat,
    "Rotate Area",
    HandleKind::Rotate
);

area_property_command!(
    /// Set an area's full extents.
    SetAreaSizeCommand,
    size,
    Vec3,
    "Resize Area",
    HandleKind::Scale
);

/// Append an area to an owner's monitor.
pub struct AddAreaCommand {
    pub owner: ObjectId,
    area: Area,
    index: Option<usize>,
}

impl AddAreaCommand {
    pub fn new(owner: ObjectId, area: Area) -> Self {
        Self {
            owner,
            area,
            index: None,
        }
    }

    /// Index of the added area, once executed
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl Command for AddAreaCommand {
    fn description(&self) -> &str {
        "Add Area"
    }

    fn execute(&mut self, scene: &mut AreaScene) -> CommandResult {
        let owner = scene
            .get_mut(self.owner)
            .ok_or(CommandError::OwnerNotFound(self.owner))?;
        self.index = Some(owner.monitor.add_area(self.area.clone()));
        Ok(())
    }

    fn undo(&mut self, scene: &mut AreaScene) -> CommandResult {
        if let Some(index) = self.index.take() {
            let owner = scene
                .get_mut(self.owner)
                .ok_or(CommandError::OwnerNotFound(self.owner))?;
            owner
                .monitor
                .remove_area(index)
                .ok_or(CommandError::AreaNotFound { owner: self.owner, index })?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Remove an area from an owner's monitor.
pub struct RemoveAreaCommand {
    pub owner: ObjectId,
    pub area_index: usize,
    removed: Option<Area>,
}

impl RemoveAreaCommand {
    pub fn new(owner: ObjectId, area_index: usize) -> Self {
        Self {
            owner,
            area_index,
            removed: None,
        }
    }
}

impl Command for RemoveAreaCommand {
    fn description(&self) -> &str {
        "Remove Area"
    }

    fn execute(&mut self, scene: &mut AreaScene) -> CommandResult {
        let owner = scene
            .get_mut(self.owner)
            .ok_or(CommandError::OwnerNotFound(self.owner))?;
        let area = owner
            .monitor
            .remove_area(self.area_index)
            .ok_or(CommandError::AreaNotFound {
                owner: self.owner,
                index: self.area_index,
            })?;
        self.removed = Some(area);
        Ok(())
    }

    fn undo(&mut self, scene: &mut AreaScene) -> CommandResult {
        if let Some(area) = self.removed.take() {
            let owner = scene
                .get_mut(self.owner)
                .ok_or(CommandError::OwnerNotFound(self.owner))?;
            owner.monitor.insert_area(self.area_index, area);
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
