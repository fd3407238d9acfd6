//! Per-owner gizmo settings.
//!
//! Each area owner carries its own toggles for the three manipulation
//! handles plus a "show all" override for wireframe filtering.

use serde::{Deserialize, Serialize};

/// Manipulation handle kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleKind {
    /// Moves the area center
    Translate,
    /// Rotates the area
    Rotate,
    /// Resizes the area
    Scale,
}

impl HandleKind {
    pub fn name(&self) -> &'static str {
        match self {
            HandleKind::Translate => "Translate",
            HandleKind::Rotate => "Rotate",
            HandleKind::Scale => "Scale",
        }
    }

    pub fn all() -> &'static [HandleKind] {
        &[HandleKind::Translate, HandleKind::Rotate, HandleKind::Scale]
    }
}

impl std::fmt::Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Gizmo toggles of one owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Draw every owner's areas regardless of tag
    pub show_all: bool,
    /// Show the translate handle
    pub show_translate: bool,
    /// Show the rotate handle
    pub show_rotate: bool,
    /// Show the scale handle
    pub show_scale: bool,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            show_all: false,
            show_translate: true,
            show_rotate: false,
            show_scale: false,
        }
    }
}

impl GizmoSettings {
    /// Settings with every handle hidden
    pub fn hidden() -> Self {
        Self {
            show_all: false,
            show_translate: false,
            show_rotate: false,
            show_scale: false,
        }
    }

    pub fn is_visible(&self, handle: HandleKind) -> bool {
        match handle {
            HandleKind::Translate => self.show_translate,
            HandleKind::Rotate => self.show_rotate,
            HandleKind::Scale => self.show_scale,
        }
    }

    pub fn set_visible(&mut self, handle: HandleKind, visible: bool) {
        match handle {
            HandleKind::Translate => self.show_translate = visible,
            HandleKind::Rotate => self.show_rotate = visible,
            HandleKind::Scale => self.show_scale = visible,
        }
    }

    /// Flip a handle toggle, returning the new state
    pub fn toggle(&mut self, handle: HandleKind) -> bool {
        let visible = !self.is_visible(handle);
        self.set_visible(handle, visible);
        visible
    }

    /// Handles currently shown
    pub fn visible_handles(&self) -> impl Iterator<Item = HandleKind> + '_ {
        HandleKind::all().iter().copied().filter(|h| self.is_visible(*h))
    }
}
