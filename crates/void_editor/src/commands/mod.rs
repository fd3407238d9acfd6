//! Command pattern implementation for undo/redo support.
//!
//! All area edits that should be undoable go through the command system.

mod area_commands;
mod command;

pub use area_commands::{
    AddAreaCommand,
    RemoveAreaCommand,
    SetAreaCenterCommand,
    SetAreaRotationCommand,
    SetAreaSizeCommand,
};
pub use command::{Command, CommandError, CommandResult};

use crate::core::{AreaScene, UndoHistory};

/// Execute a command and add it to history.
pub fn execute(scene: &mut AreaScene, history: &mut UndoHistory, mut cmd: Box<dyn Command>) -> CommandResult {
    cmd.execute(scene)?;
    history.push(cmd);
    Ok(())
}
