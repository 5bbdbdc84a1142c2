//! Systems for spawning the viewer scene and fitting it to the loaded room.
use bevy::{
    camera::primitives::MeshAabb,
    ecs::message::MessageReader,
    gltf::GltfAssetLabel,
    pbr::{DistanceFog, FogFalloff},
    prelude::*,
    window::WindowResized,
};

use crate::navigation::{bounds::RoomBounds, pose::CameraPose};
use crate::room::{
    components::{InteriorLightMarker, RoomLoad, RoomLoadStatus, RoomModel, ViewerCamera},
    config::{InteriorLightKind, SceneSettings},
    placement::{start_pose, world_box_corners},
    progress::load_phase,
};

/// Spawns the camera and global lights, and starts loading the room model.
pub fn spawn_viewer_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
) {
    commands.insert_resource(AmbientLight {
        color: settings.ambient_color,
        brightness: settings.ambient_brightness,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: settings.sun.illuminance,
            shadows_enabled: settings.sun.shadows,
            ..default()
        },
        Transform::from_translation(settings.sun.position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));

    commands.spawn((
        PointLight {
            color: settings.overhead.color,
            intensity: settings.overhead.intensity,
            range: settings.overhead.range,
            ..default()
        },
        Transform::from_translation(settings.overhead.position),
        Name::new("Overhead Light"),
    ));

    let pose = CameraPose::new(settings.camera.start_position, 0.0);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.camera.fov,
            near: settings.camera.near,
            far: settings.camera.far,
            ..default()
        }),
        DistanceFog {
            color: settings.fog.color,
            falloff: FogFalloff::Linear {
                start: settings.fog.near,
                end: settings.fog.far,
            },
            ..default()
        },
        pose.to_transform(),
        pose,
        ViewerCamera,
        Name::new("Viewer Camera"),
    ));

    let handle: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.model_path.clone()));
    let root = commands
        .spawn((SceneRoot(handle.clone()), RoomModel, Name::new("Room")))
        .id();

    info!("Loading room model from {}", settings.model_path);
    commands.insert_resource(RoomLoad::new(handle, root));
}

/// Polls the asset server and advances the room load status.
pub fn track_room_load(
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
    mut load: ResMut<RoomLoad>,
) {
    let id = load.handle.id();
    let phase = load_phase(
        asset_server.get_load_state(id).as_ref(),
        asset_server.get_recursive_dependency_load_state(id).as_ref(),
    );
    let Some(status) = load.next_status(phase) else {
        return;
    };

    match &status {
        RoomLoadStatus::Loading { progress } => {
            debug!("Room model load progress: {:.0}%", progress * 100.0);
        }
        RoomLoadStatus::Instancing => {
            info!("Room model {} loaded; waiting for instancing", settings.model_path);
        }
        RoomLoadStatus::Failed { message } => {
            error!(
                "Failed to load room model {}: {}",
                settings.model_path, message
            );
        }
        RoomLoadStatus::Ready => {}
    }
    load.status = status;
}

/// Once the room meshes exist, derives the room bounds, places the camera,
/// and spawns the interior lights.
pub fn fit_viewer_to_room(
    mut commands: Commands,
    mut load: ResMut<RoomLoad>,
    settings: Res<SceneSettings>,
    meshes: Res<Assets<Mesh>>,
    children: Query<&Children>,
    room_meshes: Query<(&Mesh3d, &GlobalTransform)>,
    mut cameras: Query<&mut CameraPose, With<ViewerCamera>>,
) {
    if load.status != RoomLoadStatus::Instancing {
        return;
    }

    let mut mesh_count = 0usize;
    let mut corners = Vec::new();
    for entity in children.iter_descendants(load.root) {
        let Ok((mesh3d, transform)) = room_meshes.get(entity) else {
            continue;
        };
        mesh_count += 1;
        let Some(aabb) = meshes.get(&mesh3d.0).and_then(|mesh| mesh.compute_aabb()) else {
            continue;
        };
        corners.extend(world_box_corners(
            Vec3::from(aabb.center),
            Vec3::from(aabb.half_extents),
            transform,
        ));
    }

    if mesh_count == 0 {
        // The scene spawns all of its entities at once, so children without
        // meshes mean the model has nothing to bound.
        if children.get(load.root).is_ok() {
            warn!(
                "Room model {} has no meshes; navigation stays unconstrained",
                settings.model_path
            );
            load.status = RoomLoadStatus::Ready;
        }
        return;
    }
    load.status = RoomLoadStatus::Ready;

    let bounds = match RoomBounds::from_points(corners) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!(
                "Room bounds unusable ({}); navigation stays unconstrained",
                err
            );
            return;
        }
    };

    let pose = start_pose(&bounds, settings.start_offset);
    info!(
        "Room ready: {} meshes, bounds {:?}..{:?} (size {:?}); camera starts at {:?}",
        mesh_count,
        bounds.min(),
        bounds.max(),
        bounds.size(),
        pose.position
    );

    for mut camera_pose in cameras.iter_mut() {
        *camera_pose = pose;
    }

    let center = bounds.center();
    for (index, light) in settings.interior.iter().enumerate() {
        let position = center + light.offset;
        match light.kind {
            InteriorLightKind::Point => {
                commands.spawn((
                    PointLight {
                        color: light.color,
                        intensity: light.intensity,
                        range: light.range,
                        shadows_enabled: light.shadows,
                        ..default()
                    },
                    Transform::from_translation(position),
                    InteriorLightMarker,
                    Name::new(format!("Interior Light {}", index)),
                ));
            }
            InteriorLightKind::Spot => {
                commands.spawn((
                    SpotLight {
                        color: light.color,
                        intensity: light.intensity,
                        range: light.range,
                        shadows_enabled: light.shadows,
                        ..default()
                    },
                    Transform::from_translation(position).looking_at(center, Vec3::Y),
                    InteriorLightMarker,
                    Name::new(format!("Interior Light {}", index)),
                ));
            }
        }
    }

    commands.insert_resource(bounds);
}

pub fn log_window_resize(mut resized: MessageReader<WindowResized>) {
    for event in resized.read() {
        debug!("Viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}
