//! Room module: scene setup, model loading, and fitting the viewer to the room.
pub mod components;
pub mod config;
pub mod placement;
pub mod plugin;
pub mod progress;
pub mod systems;

pub use plugin::{RoomLoadSystems, RoomPlugin};
