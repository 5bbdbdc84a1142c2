//! Per-frame key-driven camera movement with room containment.
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::{
    actions::{HeldActions, NavAction},
    bounds::RoomBounds,
    pose::CameraPose,
};

pub const DEFAULT_LINEAR_SPEED: f32 = 0.1;
pub const DEFAULT_ANGULAR_SPEED: f32 = 0.05;

/// Movement step sizes, applied once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// World units travelled per frame.
    pub linear_speed: f32,
    /// Radians turned per frame.
    pub angular_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            linear_speed: DEFAULT_LINEAR_SPEED,
            angular_speed: DEFAULT_ANGULAR_SPEED,
        }
    }
}

/// Turns held actions into a pose update, then confines the pose to the room.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct NavigationController {
    config: MovementConfig,
}

impl NavigationController {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Advances `pose` by one frame.
    ///
    /// Translation uses the yaw from the start of the frame; turning is applied
    /// afterwards. Without bounds the position is left unclamped.
    pub fn update(&self, held: HeldActions, pose: &mut CameraPose, bounds: Option<&RoomBounds>) {
        let step = self.config.linear_speed;
        let yaw = pose.yaw;

        if held.contains(NavAction::Forward) {
            pose.position -= planar_heading(yaw) * step;
        }
        if held.contains(NavAction::Back) {
            pose.position += planar_heading(yaw) * step;
        }
        if held.contains(NavAction::StrafeLeft) {
            pose.position += planar_heading(yaw + FRAC_PI_2) * step;
        }
        if held.contains(NavAction::StrafeRight) {
            pose.position += planar_heading(yaw - FRAC_PI_2) * step;
        }

        if held.contains(NavAction::TurnLeft) {
            pose.yaw -= self.config.angular_speed;
        }
        if held.contains(NavAction::TurnRight) {
            pose.yaw += self.config.angular_speed;
        }

        if let Some(bounds) = bounds {
            pose.position = bounds.clamp(pose.position);
        }
    }
}

/// Horizontal unit vector `(sin yaw, 0, cos yaw)`.
fn planar_heading(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    fn held(actions: &[NavAction]) -> HeldActions {
        actions.iter().copied().collect()
    }

    fn room() -> RoomBounds {
        RoomBounds::new(Vec3::splat(-5.0), Vec3::splat(5.0)).unwrap()
    }

    #[test]
    fn no_input_leaves_pose_unchanged() {
        let controller = NavigationController::default();
        for start in [
            CameraPose::new(Vec3::new(1.0, 2.0, -3.0), 0.7),
            CameraPose::new(Vec3::new(-4.9, 0.0, 4.9), -12.0),
        ] {
            let mut pose = start;
            controller.update(HeldActions::NONE, &mut pose, Some(&room()));
            assert_eq!(pose, start);

            controller.update(HeldActions::NONE, &mut pose, None);
            assert_eq!(pose, start);
        }
    }

    #[test]
    fn forward_at_zero_yaw_moves_down_negative_z() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::ZERO, 0.0);

        controller.update(held(&[NavAction::Forward]), &mut pose, None);

        assert!(pose.position.distance(Vec3::new(0.0, 0.0, -0.1)) < EPS);
        assert_eq!(pose.yaw, 0.0);
    }

    #[test]
    fn opposite_keys_cancel_for_any_yaw() {
        let controller = NavigationController::default();
        let start = Vec3::new(0.5, 1.5, -2.0);
        for step in 0..16 {
            let yaw = step as f32 * PI / 8.0 - PI;

            let mut pose = CameraPose::new(start, yaw);
            controller.update(
                held(&[NavAction::Forward, NavAction::Back]),
                &mut pose,
                None,
            );
            assert!(pose.position.distance(start) < EPS, "yaw {yaw}");

            let mut pose = CameraPose::new(start, yaw);
            controller.update(
                held(&[NavAction::StrafeLeft, NavAction::StrafeRight]),
                &mut pose,
                None,
            );
            assert!(pose.position.distance(start) < EPS, "yaw {yaw}");
        }
    }

    #[test]
    fn strafe_left_at_quarter_turn_moves_down_negative_z() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::ZERO, FRAC_PI_2);

        controller.update(held(&[NavAction::StrafeLeft]), &mut pose, None);

        assert!(pose.position.x.abs() < EPS);
        assert_eq!(pose.position.y, 0.0);
        assert!((pose.position.z + 0.1).abs() < EPS);
    }

    #[test]
    fn movement_never_changes_height() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::new(0.0, 1.7, 0.0), 0.4);
        let everything: HeldActions = NavAction::ALL.into_iter().collect();

        for _ in 0..50 {
            controller.update(held(&[NavAction::Forward, NavAction::StrafeRight]), &mut pose, None);
            controller.update(everything, &mut pose, None);
        }
        assert_eq!(pose.position.y, 1.7);
    }

    #[test]
    fn turning_accumulates_per_frame() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::ZERO, 0.0);

        for _ in 0..40 {
            controller.update(held(&[NavAction::TurnLeft]), &mut pose, None);
        }
        assert!((pose.yaw + 40.0 * DEFAULT_ANGULAR_SPEED).abs() < EPS);
        assert_eq!(pose.position, Vec3::ZERO);

        for _ in 0..40 {
            controller.update(held(&[NavAction::TurnRight]), &mut pose, None);
        }
        assert!(pose.yaw.abs() < EPS);
    }

    #[test]
    fn turn_applies_after_translation_in_the_same_frame() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::ZERO, 0.0);

        controller.update(
            held(&[NavAction::Forward, NavAction::TurnRight]),
            &mut pose,
            None,
        );

        assert!(pose.position.distance(Vec3::new(0.0, 0.0, -0.1)) < EPS);
        assert!((pose.yaw - DEFAULT_ANGULAR_SPEED).abs() < EPS);
    }

    #[test]
    fn clamp_pulls_pose_back_into_room() {
        let controller = NavigationController::default();
        let mut pose = CameraPose::new(Vec3::new(5.05, 0.0, 0.0), 0.0);

        controller.update(HeldActions::NONE, &mut pose, Some(&room()));

        assert_eq!(pose.position, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn pushing_into_a_corner_slides_along_the_free_axis() {
        let controller = NavigationController::new(MovementConfig {
            linear_speed: 1.0,
            angular_speed: 0.0,
        });
        let bounds = room();
        let mut pose = CameraPose::new(Vec3::new(0.0, 0.0, -4.5), PI / 4.0);

        for _ in 0..20 {
            controller.update(held(&[NavAction::Forward]), &mut pose, Some(&bounds));
        }

        assert_eq!(pose.position, Vec3::new(-5.0, 0.0, -5.0));
    }

    #[test]
    fn movement_is_unbounded_without_room() {
        let controller = NavigationController::new(MovementConfig {
            linear_speed: 10.0,
            angular_speed: 0.0,
        });
        let mut pose = CameraPose::new(Vec3::ZERO, 0.0);

        for _ in 0..100 {
            controller.update(held(&[NavAction::Back]), &mut pose, None);
        }

        assert!((pose.position.z - 1000.0).abs() < 1e-2);
    }
}
