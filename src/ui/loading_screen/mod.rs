// src/ui/loading_screen/mod.rs
//
// Loading overlay: percentage while the room streams in, error text on failure.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
