//! Command trait and result types.

use std::any::Any;

use thiserror::Error;
use void_core::ObjectId;

use crate::core::AreaScene;
use crate::viewport::HandleKind;

/// Result type for command execution.
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Owner not found: {0}")]
    OwnerNotFound(ObjectId),

    #[error("Area {index} not found on {owner}")]
    AreaNotFound { owner: ObjectId, index: usize },

    #[error("{handle} handle is hidden on {owner}")]
    HandleHidden { owner: ObjectId, handle: HandleKind },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// A command that can be executed, undone, and redone.
///
/// Commands are the only way handle edits reach the scene. They capture
/// both the action and its inverse.
///
/// # Example
///
/// ```ignore
/// let mut cmd = SetAreaCenterCommand::new(owner, 0, Vec3::new(0.0, 2.0, 0.0));
/// cmd.execute(&mut scene)?;
/// cmd.undo(&mut scene)?;
/// ```
pub trait Command: Send + Sync {
    /// Human-readable description for the undo/redo menu.
    fn description(&self) -> &str;

    /// Execute the command, modifying the scene.
    fn execute(&mut self, scene: &mut AreaScene) -> CommandResult;

    /// Undo the command, restoring the previous state.
    fn undo(&mut self, scene: &mut AreaScene) -> CommandResult;

    /// Check if `other`, pushed right after this command, can be folded
    /// into it as one undo step (e.g. successive drags of one handle).
    fn can_merge(&self, _other: &dyn Command) -> bool {
        false
    }

    /// Absorb the command this one replaces in the history.
    ///
    /// Called on the newer command; it takes over the older command's
    /// saved state so undo restores the value from before the first edit.
    fn merge(&mut self, _previous: &dyn Command) {}

    fn as_any(&self) -> &dyn Any;
}

/// Resolve an area of an owner for a command.
pub(crate) fn area_mut(
    scene: &mut AreaScene,
    owner: ObjectId,
    index: usize,
) -> Result<&mut void_triggers::Area, CommandError> {
    scene
        .get_mut(owner)
        .ok_or(CommandError::OwnerNotFound(owner))?
        .area_mut(index)
        .ok_or(CommandError::AreaNotFound { owner, index })
}
