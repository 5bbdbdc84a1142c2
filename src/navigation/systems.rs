//! Systems feeding keyboard input into the navigation controller.
use bevy::{
    ecs::message::MessageReader,
    input::{keyboard::KeyboardInput, ButtonState},
    prelude::*,
};

use crate::navigation::{
    actions::KeyBindings, bounds::RoomBounds, controller::NavigationController, input::KeyState,
    pose::CameraPose,
};

/// Accumulates key-down/key-up messages into [`KeyState`].
pub fn capture_key_input(mut events: MessageReader<KeyboardInput>, mut keys: ResMut<KeyState>) {
    for event in events.read() {
        match event.state {
            ButtonState::Pressed => keys.press(event.key_code),
            ButtonState::Released => keys.release(event.key_code),
        }
    }
}

/// Steps every navigated camera by one frame and writes the result into its transform.
pub fn apply_navigation(
    keys: Res<KeyState>,
    bindings: Res<KeyBindings>,
    controller: Res<NavigationController>,
    bounds: Option<Res<RoomBounds>>,
    mut cameras: Query<(&mut CameraPose, &mut Transform)>,
) {
    let held = keys.held_actions(&bindings);
    let bounds = bounds.as_deref();

    for (mut pose, mut transform) in cameras.iter_mut() {
        controller.update(held, &mut pose, bounds);
        pose.apply_to(&mut transform);
    }
}

#[cfg(feature = "nav_debug")]
#[derive(Resource)]
pub struct PoseLogTimer {
    timer: Timer,
}

#[cfg(feature = "nav_debug")]
impl Default for PoseLogTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

#[cfg(feature = "nav_debug")]
pub fn log_camera_pose(
    mut timer: ResMut<PoseLogTimer>,
    time: Res<Time>,
    bounds: Option<Res<RoomBounds>>,
    cameras: Query<&CameraPose>,
) {
    if !timer.timer.tick(time.delta()).just_finished() {
        return;
    }
    for pose in cameras.iter() {
        info!(
            target: "nav_debug",
            "Camera at ({:.2}, {:.2}, {:.2}) yaw {:.3} | bounded: {}",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.yaw,
            bounds.is_some(),
        );
    }
}
