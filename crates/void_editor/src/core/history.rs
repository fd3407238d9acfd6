//! Undo/Redo history with command pattern.
//!
//! Every area edit goes through the history so it can be undone.
//! Consecutive mergeable commands collapse into one undo step until the
//! history is sealed (end of a handle drag).

use crate::commands::Command;

/// Undo/redo history stack.
pub struct UndoHistory {
    /// Commands that can be undone
    undo_stack: Vec<Box<dyn Command>>,
    /// Commands that can be redone
    redo_stack: Vec<Box<dyn Command>>,
    /// Maximum history size
    max_size: usize,
    /// Next push starts a new undo step even if it could merge
    sealed: bool,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    /// Default maximum history size.
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
            sealed: false,
        }
    }

    /// Check if there are commands to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the description of the next undo command.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get the description of the next redo command.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Stop merging into the last command.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Push a command that has already been executed.
    pub fn push(&mut self, mut cmd: Box<dyn Command>) {
        let merge = !self.sealed
            && self
                .undo_stack
                .last()
                .map_or(false, |last| last.can_merge(cmd.as_ref()));
        if merge {
            if let Some(previous) = self.undo_stack.pop() {
                cmd.merge(previous.as_ref());
            }
        }
        self.sealed = false;

        self.undo_stack.push(cmd);
        self.redo_stack.clear(); // Clear redo on new action

        // Trim if over limit
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop a command from the undo stack.
    pub fn pop_undo(&mut self) -> Option<Box<dyn Command>> {
        let cmd = self.undo_stack.pop();
        if cmd.is_some() {
            self.sealed = true;
        }
        cmd
    }

    /// Pop a command from the redo stack.
    pub fn pop_redo(&mut self) -> Option<Box<dyn Command>> {
        self.redo_stack.pop()
    }

    /// Push a command to the undo stack (for redo completion).
    pub fn push_to_undo(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
        self.sealed = true;
    }

    /// Push a command to the redo stack (for undo completion).
    pub fn push_to_redo(&mut self, cmd: Box<dyn Command>) {
        self.redo_stack.push(cmd);
    }

    /// Get the number of commands in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
