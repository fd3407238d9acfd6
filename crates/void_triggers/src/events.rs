//! Area transition events

use void_core::ObjectId;

/// Kind of area transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Target entered the area
    Enter,
    /// Target exited the area
    Exit,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enter => write!(f, "enter"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// A transition raised by a poll
#[derive(Debug, Clone, PartialEq)]
pub struct AreaTransition {
    /// Owner of the monitor
    pub owner: ObjectId,
    /// Index of the area in the monitor's list
    pub area_index: usize,
    /// Name of the area
    pub area_name: String,
    /// Enter or exit
    pub kind: TransitionKind,
}

impl AreaTransition {
    /// Create an enter transition
    pub fn enter(owner: ObjectId, area_index: usize, area_name: impl Into<String>) -> Self {
        Self {
            owner,
            area_index,
            area_name: area_name.into(),
            kind: TransitionKind::Enter,
        }
    }

    /// Create an exit transition
    pub fn exit(owner: ObjectId, area_index: usize, area_name: impl Into<String>) -> Self {
        Self {
            owner,
            area_index,
            area_name: area_name.into(),
            kind: TransitionKind::Exit,
        }
    }

    /// Check if this is an enter transition
    pub fn is_enter(&self) -> bool {
        self.kind == TransitionKind::Enter
    }

    /// Check if this is an exit transition
    pub fn is_exit(&self) -> bool {
        self.kind == TransitionKind::Exit
    }
}

/// Callback type for area transitions
pub type TransitionCallback = Box<dyn Fn(&AreaTransition) + Send + Sync>;

/// Builder for transition handlers
pub struct TransitionHandler {
    /// Callback for enter transitions
    pub on_enter: Option<TransitionCallback>,
    /// Callback for exit transitions
    pub on_exit: Option<TransitionCallback>,
}

impl TransitionHandler {
    /// Create a new empty handler
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_exit: None,
        }
    }

    /// Set enter callback
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&AreaTransition) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Set exit callback
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&AreaTransition) + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(f));
        self
    }

    /// Handle a transition
    pub fn handle(&self, transition: &AreaTransition) {
        let callback = match transition.kind {
            TransitionKind::Enter => &self.on_enter,
            TransitionKind::Exit => &self.on_exit,
        };
        if let Some(callback) = callback {
            callback(transition);
        }
    }
}

impl Default for TransitionHandler {
    fn default() -> Self {
        Self::new()
    }
}
