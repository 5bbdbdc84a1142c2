//! Geometry helpers for fitting the viewer to a freshly loaded room.
use bevy::prelude::*;

use crate::navigation::{bounds::RoomBounds, pose::CameraPose};

/// World-space corners of a local box after applying `transform`.
pub fn world_box_corners(
    center: Vec3,
    half_extents: Vec3,
    transform: &GlobalTransform,
) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (index, corner) in corners.iter_mut().enumerate() {
        let sign = Vec3::new(
            if index & 1 == 0 { -1.0 } else { 1.0 },
            if index & 2 == 0 { -1.0 } else { 1.0 },
            if index & 4 == 0 { -1.0 } else { 1.0 },
        );
        *corner = transform.transform_point(center + half_extents * sign);
    }
    corners
}

/// Camera start: centred in the room, pulled back along +Z, facing -Z.
pub fn start_pose(bounds: &RoomBounds, offset: f32) -> CameraPose {
    CameraPose::new(bounds.center() + Vec3::Z * offset, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_unit_box_under_translation() {
        let transform = GlobalTransform::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let corners = world_box_corners(Vec3::ZERO, Vec3::splat(1.0), &transform);
        let bounds = RoomBounds::from_points(corners).unwrap();

        assert_eq!(bounds.min(), Vec3::new(9.0, -1.0, -1.0));
        assert_eq!(bounds.max(), Vec3::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn corners_follow_scale_and_offset_center() {
        let transform = GlobalTransform::from_scale(Vec3::new(2.0, 1.0, 3.0));
        let corners = world_box_corners(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(0.5), &transform);
        let bounds = RoomBounds::from_points(corners).unwrap();

        assert_eq!(bounds.min(), Vec3::new(-1.0, 0.5, -1.5));
        assert_eq!(bounds.max(), Vec3::new(1.0, 1.5, 1.5));
    }

    #[test]
    fn start_pose_sits_in_front_of_centre() {
        let bounds = RoomBounds::new(Vec3::new(-4.0, 0.0, -10.0), Vec3::new(4.0, 6.0, 10.0)).unwrap();
        let pose = start_pose(&bounds, 5.0);

        assert_eq!(pose.position, Vec3::new(0.0, 3.0, 5.0));
        assert_eq!(pose.yaw, 0.0);
        assert_eq!(bounds.clamp(pose.position), pose.position);
    }
}
