//! Design-time visualization: gizmo settings, wire boxes and handles.

mod gizmo_state;
mod wireframe;

pub use gizmo_state::{GizmoSettings, HandleKind};
pub use wireframe::{draw_list, handles, visible_owners, HandlePlacement, WireBox};
