//! Area editor: selection, gated handle edits and undo/redo.

use glam::{Quat, Vec3};
use void_core::ObjectId;
use void_triggers::Area;

use crate::commands::{
    self, AddAreaCommand, Command, CommandError, CommandResult, RemoveAreaCommand,
    SetAreaCenterCommand, SetAreaRotationCommand, SetAreaSizeCommand,
};
use crate::core::{AreaScene, UndoHistory};
use crate::viewport::{self, HandleKind, HandlePlacement, WireBox};

/// A value produced by dragging one of the three handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandleEdit {
    /// New center, relative to the owner
    Translate(Vec3),
    /// New rotation
    Rotate(Quat),
    /// New full extents
    Scale(Vec3),
}

impl HandleEdit {
    pub fn kind(&self) -> HandleKind {
        match self {
            HandleEdit::Translate(_) => HandleKind::Translate,
            HandleEdit::Rotate(_) => HandleKind::Rotate,
            HandleEdit::Scale(_) => HandleKind::Scale,
        }
    }
}

/// Editing session over an [`AreaScene`].
pub struct AreaEditor {
    scene: AreaScene,
    history: UndoHistory,
}

impl AreaEditor {
    pub fn new(scene: AreaScene) -> Self {
        Self {
            scene,
            history: UndoHistory::new(),
        }
    }

    pub fn scene(&self) -> &AreaScene {
        &self.scene
    }

    /// Direct scene access. Changes made here are not undoable.
    pub fn scene_mut(&mut self) -> &mut AreaScene {
        &mut self.scene
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn into_scene(self) -> AreaScene {
        self.scene
    }

    pub fn select(&mut self, owner: ObjectId) {
        self.scene.select(owner);
    }

    /// Execute a command and record it.
    pub fn execute(&mut self, cmd: Box<dyn Command>) -> CommandResult {
        let description = cmd.description().to_string();
        commands::execute(&mut self.scene, &mut self.history, cmd)?;
        log::debug!("Executed: {}", description);
        Ok(())
    }

    /// Apply a handle drag to one area.
    ///
    /// Rejected when the owner has that handle hidden. Successive edits of
    /// the same handle on the same area merge until [`end_drag`](Self::end_drag).
    pub fn handle_edit(&mut self, owner: ObjectId, area_index: usize, edit: HandleEdit) -> CommandResult {
        let handle = edit.kind();
        let settings = &self
            .scene
            .get(owner)
            .ok_or(CommandError::OwnerNotFound(owner))?
            .gizmos;
        if !settings.is_visible(handle) {
            return Err(CommandError::HandleHidden { owner, handle });
        }

        let cmd: Box<dyn Command> = match edit {
            HandleEdit::Translate(center) => Box::new(SetAreaCenterCommand::new(owner, area_index, center)),
            HandleEdit::Rotate(rotation) => Box::new(SetAreaRotationCommand::new(owner, area_index, rotation)),
            HandleEdit::Scale(size) => Box::new(SetAreaSizeCommand::new(owner, area_index, size)),
        };
        self.execute(cmd)
    }

    /// Finish a drag; the next edit starts a new undo step.
    pub fn end_drag(&mut self) {
        self.history.seal();
    }

    /// Append an area, returning its index
    pub fn add_area(&mut self, owner: ObjectId, area: Area) -> Result<usize, CommandError> {
        let mut cmd = AddAreaCommand::new(owner, area);
        cmd.execute(&mut self.scene)?;
        let index = cmd.index().ok_or_else(|| {
            CommandError::InvalidOperation("area was not added".to_string())
        })?;
        self.history.push(Box::new(cmd));
        Ok(index)
    }

    pub fn remove_area(&mut self, owner: ObjectId, area_index: usize) -> CommandResult {
        self.execute(Box::new(RemoveAreaCommand::new(owner, area_index)))
    }

    /// Undo the last command. Returns false if nothing was undone.
    pub fn undo(&mut self) -> bool {
        if let Some(mut cmd) = self.history.pop_undo() {
            let desc = cmd.description().to_string();
            match cmd.undo(&mut self.scene) {
                Ok(()) => {
                    self.history.push_to_redo(cmd);
                    log::info!("Undo: {}", desc);
                    true
                }
                Err(e) => {
                    // Put command back on undo stack
                    self.history.push_to_undo(cmd);
                    log::error!("Undo failed: {}", e);
                    false
                }
            }
        } else {
            log::debug!("Nothing to undo");
            false
        }
    }

    /// Redo the last undone command. Returns false if nothing was redone.
    pub fn redo(&mut self) -> bool {
        if let Some(mut cmd) = self.history.pop_redo() {
            let desc = cmd.description().to_string();
            match cmd.execute(&mut self.scene) {
                Ok(()) => {
                    self.history.push_to_undo(cmd);
                    log::info!("Redo: {}", desc);
                    true
                }
                Err(e) => {
                    // Put command back on redo stack
                    self.history.push_to_redo(cmd);
                    log::error!("Redo failed: {}", e);
                    false
                }
            }
        } else {
            log::debug!("Nothing to redo");
            false
        }
    }

    /// Wire boxes for the current selection
    pub fn draw_list(&self) -> Vec<WireBox> {
        self.scene
            .selected()
            .map(|selected| viewport::draw_list(&self.scene, selected))
            .unwrap_or_default()
    }

    /// Visible handles of the current selection
    pub fn handles(&self) -> Vec<HandlePlacement> {
        self.scene
            .selected()
            .map(|selected| viewport::handles(&self.scene, selected))
            .unwrap_or_default()
    }
}
