//! NavigationPlugin wires key capture and the per-frame camera update.
use bevy::prelude::*;

use crate::navigation::{
    config::NavigationSettings,
    controller::NavigationController,
    input::KeyState,
    systems::{apply_navigation, capture_key_input},
};

/// Ordering label for the key-capture and movement systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationSystems;

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        let settings = NavigationSettings::load_or_default();
        info!(
            "Navigation configured: {:.3} units/frame, {:.3} rad/frame",
            settings.movement.linear_speed, settings.movement.angular_speed
        );

        app.insert_resource(NavigationController::new(settings.movement))
            .insert_resource(settings.bindings)
            .init_resource::<KeyState>()
            .add_systems(
                Update,
                (capture_key_input, apply_navigation.after(capture_key_input))
                    .in_set(NavigationSystems),
            );

        #[cfg(feature = "nav_debug")]
        {
            use crate::navigation::systems::{log_camera_pose, PoseLogTimer};

            app.init_resource::<PoseLogTimer>()
                .add_systems(Update, log_camera_pose.after(apply_navigation));
        }
    }
}
