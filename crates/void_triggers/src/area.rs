//! Area definitions

use crate::events::TransitionKind;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use void_audio::AudioEvent;
use void_physics::OrientedBox;

/// One oriented box volume of an area monitor.
///
/// The box is placed at the owner's position plus `center`; it is not
/// affected by the owner's rotation or scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    /// Display name (logs, gizmo labels)
    pub name: String,
    /// Offset from the owner's position
    pub center: Vec3,
    /// Full extents of the box
    pub size: Vec3,
    /// Orientation of the box
    pub rotation: Quat,
    /// Posted on the owner when the target enters
    pub enter_event: Option<AudioEvent>,
    /// Posted on the owner when the target exits
    pub exit_event: Option<AudioEvent>,
    /// Stop the enter event when the target exits
    pub stop_enter_event_on_exit: bool,
    /// Whether the exit event is posted at all
    pub exit_event_enabled: bool,
    /// Emit `enter_message` on enter
    pub log_on_enter: bool,
    /// Emit `exit_message` on exit
    pub log_on_exit: bool,
    /// Debug message for enter
    pub enter_message: String,
    /// Debug message for exit
    pub exit_message: String,
    /// Containment result of the previous poll
    #[serde(skip)]
    was_inside: bool,
}

impl Area {
    /// Create a unit area at the owner's origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set offset from the owner
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Set full extents
    pub fn with_size(mut self, size: Vec3) -> Self {
        self.size = size;
        self
    }

    /// Set orientation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the enter event
    pub fn with_enter_event(mut self, event: impl Into<AudioEvent>) -> Self {
        self.enter_event = Some(event.into());
        self
    }

    /// Set the exit event
    pub fn with_exit_event(mut self, event: impl Into<AudioEvent>) -> Self {
        self.exit_event = Some(event.into());
        self
    }

    /// Stop the enter event on exit
    pub fn stop_enter_event_on_exit(mut self, stop: bool) -> Self {
        self.stop_enter_event_on_exit = stop;
        self
    }

    /// Enable or disable the exit event
    pub fn with_exit_event_enabled(mut self, enabled: bool) -> Self {
        self.exit_event_enabled = enabled;
        self
    }

    /// Emit a debug message on enter
    pub fn log_on_enter(mut self, message: impl Into<String>) -> Self {
        self.log_on_enter = true;
        self.enter_message = message.into();
        self
    }

    /// Emit a debug message on exit
    pub fn log_on_exit(mut self, message: impl Into<String>) -> Self {
        self.log_on_exit = true;
        self.exit_message = message.into();
        self
    }

    /// Half of the box's size
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// The box in world space for an owner at `origin`
    pub fn world_box(&self, origin: Vec3) -> OrientedBox {
        OrientedBox::from_size(origin + self.center, self.size, self.rotation)
    }

    /// Whether the target was inside at the last poll
    pub fn is_inside(&self) -> bool {
        self.was_inside
    }

    /// Forget the last containment result
    pub fn reset(&mut self) {
        self.was_inside = false;
    }

    /// Record this poll's containment result and report the edge, if any
    pub(crate) fn transition(&mut self, contained: bool) -> Option<TransitionKind> {
        let kind = match (self.was_inside, contained) {
            (false, true) => Some(TransitionKind::Enter),
            (true, false) => Some(TransitionKind::Exit),
            _ => None,
        };
        self.was_inside = contained;
        kind
    }
}

impl Default for Area {
    fn default() -> Self {
        Self {
            name: "Area".to_string(),
            center: Vec3::ZERO,
            size: Vec3::ONE,
            rotation: Quat::IDENTITY,
            enter_event: None,
            exit_event: None,
            stop_enter_event_on_exit: false,
            exit_event_enabled: true,
            log_on_enter: false,
            log_on_exit: false,
            enter_message: "Entered area".to_string(),
            exit_message: "Exited area".to_string(),
            was_inside: false,
        }
    }
}
