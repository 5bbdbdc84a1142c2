// src/ui/loading_screen/plugin.rs
//
// UiPlugin registers the loading overlay.

use bevy::prelude::*;

use crate::room::RoomLoadSystems;

use super::systems::{spawn_loading_screen, update_loading_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.add_systems(Startup, spawn_loading_screen).add_systems(
            Update,
            update_loading_screen.after(RoomLoadSystems),
        );
    }
}
