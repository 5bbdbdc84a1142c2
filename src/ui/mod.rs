// src/ui/mod.rs
//
// UI module providing screen-space overlays for the viewer.
//
// Current features:
// - Loading screen (progress percentage until the room is placed)

pub mod loading_screen;

// Re-export the main plugin
pub use loading_screen::UiPlugin;
