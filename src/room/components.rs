//! Components and resources for the room scene.
use bevy::prelude::*;

use crate::room::progress::LoadPhase;

/// Marker for the camera the viewer navigates.
#[derive(Component, Debug, Default)]
pub struct ViewerCamera;

/// Marker for the scene root holding the loaded room model.
#[derive(Component, Debug, Default)]
pub struct RoomModel;

/// Marker for lights spawned around the room centre after load.
#[derive(Component, Debug, Default)]
pub struct InteriorLightMarker;

/// Where the room model is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomLoadStatus {
    /// Asset still streaming; `progress` is in `[0, 1]`.
    Loading { progress: f32 },
    /// Asset loaded, waiting for its meshes to be instanced.
    Instancing,
    /// Bounds computed and camera placed.
    Ready,
    Failed { message: String },
}

impl RoomLoadStatus {
    pub fn progress(&self) -> f32 {
        match self {
            Self::Loading { progress } => *progress,
            Self::Instancing | Self::Ready => 1.0,
            Self::Failed { .. } => 0.0,
        }
    }
}

/// Tracks the single room load issued at startup.
#[derive(Resource, Debug)]
pub struct RoomLoad {
    pub handle: Handle<Scene>,
    pub root: Entity,
    pub status: RoomLoadStatus,
}

impl RoomLoad {
    pub fn new(handle: Handle<Scene>, root: Entity) -> Self {
        Self {
            handle,
            root,
            status: RoomLoadStatus::Loading { progress: 0.0 },
        }
    }

    /// Status the load moves to after observing `phase`, if it changes.
    ///
    /// Only a `Loading` status advances. A failed load stays failed.
    pub fn next_status(&self, phase: LoadPhase) -> Option<RoomLoadStatus> {
        if !matches!(self.status, RoomLoadStatus::Loading { .. }) {
            return None;
        }
        let next = match phase {
            LoadPhase::InProgress(progress) => RoomLoadStatus::Loading { progress },
            LoadPhase::Complete => RoomLoadStatus::Instancing,
            LoadPhase::Failed(message) => RoomLoadStatus::Failed { message },
        };
        (next != self.status).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_with(status: RoomLoadStatus) -> RoomLoad {
        RoomLoad {
            handle: Handle::default(),
            root: Entity::PLACEHOLDER,
            status,
        }
    }

    #[test]
    fn loading_advances_through_progress_to_instancing() {
        let load = load_with(RoomLoadStatus::Loading { progress: 0.0 });

        assert_eq!(load.next_status(LoadPhase::InProgress(0.0)), None);
        assert_eq!(
            load.next_status(LoadPhase::InProgress(0.6)),
            Some(RoomLoadStatus::Loading { progress: 0.6 })
        );
        assert_eq!(
            load.next_status(LoadPhase::Complete),
            Some(RoomLoadStatus::Instancing)
        );
    }

    #[test]
    fn failure_is_terminal() {
        let load = load_with(RoomLoadStatus::Loading { progress: 0.1 });
        let failed = load
            .next_status(LoadPhase::Failed("Path not found".to_string()))
            .unwrap();
        assert_eq!(
            failed,
            RoomLoadStatus::Failed {
                message: "Path not found".to_string()
            }
        );

        let load = load_with(failed);
        assert_eq!(load.next_status(LoadPhase::InProgress(0.1)), None);
        assert_eq!(load.next_status(LoadPhase::Complete), None);
        assert_eq!(load.next_status(LoadPhase::Failed("again".to_string())), None);
    }

    #[test]
    fn settled_statuses_ignore_the_asset_server() {
        for status in [RoomLoadStatus::Instancing, RoomLoadStatus::Ready] {
            let load = load_with(status);
            assert_eq!(load.next_status(LoadPhase::InProgress(0.0)), None);
            assert_eq!(load.next_status(LoadPhase::Complete), None);
        }
    }
}
