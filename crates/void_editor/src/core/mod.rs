//! Core editor types: the scene of area owners and the undo history.

mod history;
mod scene;

pub use history::UndoHistory;
pub use scene::{AreaOwner, AreaScene};
