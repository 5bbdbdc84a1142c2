//! Keyboard navigation: held keys become per-frame camera moves clamped to the room.
pub mod actions;
pub mod bounds;
pub mod config;
pub mod controller;
pub mod input;
pub mod plugin;
pub mod pose;
pub mod systems;

pub use plugin::{NavigationPlugin, NavigationSystems};
