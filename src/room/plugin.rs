//! RoomPlugin sets up the camera, light rig, and asynchronous room load.
use bevy::prelude::*;

use crate::navigation::NavigationSystems;
use crate::room::{
    config::SceneSettings,
    systems::{fit_viewer_to_room, log_window_resize, spawn_viewer_scene, track_room_load},
};

/// Ordering label for systems that advance the room load.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomLoadSystems;

pub struct RoomPlugin;

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        let settings = SceneSettings::load_or_default();
        info!(
            "Scene configured: model {}, {} interior lights, fog {:.0}..{:.0}",
            settings.model_path,
            settings.interior.len(),
            settings.fog.near,
            settings.fog.far
        );

        app.insert_resource(settings)
            .add_systems(Startup, spawn_viewer_scene)
            .add_systems(
                Update,
                (
                    (track_room_load, fit_viewer_to_room.after(track_room_load))
                        .in_set(RoomLoadSystems)
                        .before(NavigationSystems),
                    log_window_resize,
                ),
            );
    }
}
