//! Camera pose driven by the navigation controller.
use bevy::prelude::*;

/// Position plus yaw about the vertical axis.
///
/// Yaw accumulates without wraparound; only its sine and cosine are used.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }

    /// Writes the pose into a transform, leaving scale untouched.
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.rotation();
    }
}
