// src/ui/loading_screen/components.rs
//
// Markers for the loading overlay shown while the room model streams in.

use bevy::prelude::*;

/// Full-screen overlay root. Hidden once the room is ready.
#[derive(Component, Debug)]
pub struct LoadingScreen;

/// Text node showing the load percentage or failure message.
#[derive(Component, Debug)]
pub struct LoadingProgressText;
