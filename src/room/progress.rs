//! Maps asset-server load states onto a display fraction.
//!
//! The asset server reports load states rather than byte counts, so progress
//! advances in stages: queued, root file parsed, every dependency loaded.
use bevy::asset::{LoadState, RecursiveDependencyLoadState};

const ROOT_LOADING: f32 = 0.1;
const ROOT_LOADED: f32 = 0.6;

/// Outcome of inspecting the room asset for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    InProgress(f32),
    Complete,
    Failed(String),
}

pub fn load_phase(
    root: Option<&LoadState>,
    dependencies: Option<&RecursiveDependencyLoadState>,
) -> LoadPhase {
    if let Some(LoadState::Failed(err)) = root {
        return LoadPhase::Failed(err.to_string());
    }
    if let Some(RecursiveDependencyLoadState::Failed(err)) = dependencies {
        return LoadPhase::Failed(err.to_string());
    }

    match (root, dependencies) {
        (Some(LoadState::Loaded), Some(RecursiveDependencyLoadState::Loaded)) => {
            LoadPhase::Complete
        }
        (Some(LoadState::Loaded), _) => LoadPhase::InProgress(ROOT_LOADED),
        (Some(LoadState::Loading), _) => LoadPhase::InProgress(ROOT_LOADING),
        _ => LoadPhase::InProgress(0.0),
    }
}

/// Rounded percentage label, e.g. `42%`.
pub fn percent_label(fraction: f32) -> String {
    format!("{}%", (fraction.clamp(0.0, 1.0) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use bevy::asset::{io::AssetReaderError, AssetLoadError};

    use super::*;

    fn missing_file() -> Arc<AssetLoadError> {
        Arc::new(AssetLoadError::from(AssetReaderError::NotFound(
            PathBuf::from("the_king_s_hall/scene.gltf"),
        )))
    }

    #[test]
    fn stages_advance_monotonically() {
        let queued = load_phase(None, None);
        let fetching = load_phase(Some(&LoadState::Loading), None);
        let parsed = load_phase(
            Some(&LoadState::Loaded),
            Some(&RecursiveDependencyLoadState::Loading),
        );
        let done = load_phase(
            Some(&LoadState::Loaded),
            Some(&RecursiveDependencyLoadState::Loaded),
        );

        assert_eq!(queued, LoadPhase::InProgress(0.0));
        assert_eq!(fetching, LoadPhase::InProgress(ROOT_LOADING));
        assert_eq!(parsed, LoadPhase::InProgress(ROOT_LOADED));
        assert_eq!(done, LoadPhase::Complete);
    }

    #[test]
    fn not_loaded_counts_as_queued() {
        assert_eq!(
            load_phase(
                Some(&LoadState::NotLoaded),
                Some(&RecursiveDependencyLoadState::NotLoaded)
            ),
            LoadPhase::InProgress(0.0)
        );
    }

    #[test]
    fn root_failure_is_reported() {
        let phase = load_phase(Some(&LoadState::Failed(missing_file())), None);

        let LoadPhase::Failed(message) = phase else {
            panic!("expected a failed phase, got {:?}", phase);
        };
        assert!(message.contains("the_king_s_hall/scene.gltf"));
    }

    #[test]
    fn dependency_failure_is_reported_even_after_root_loads() {
        let phase = load_phase(
            Some(&LoadState::Loaded),
            Some(&RecursiveDependencyLoadState::Failed(missing_file())),
        );

        assert!(matches!(phase, LoadPhase::Failed(_)));
    }

    #[test]
    fn percent_label_rounds_and_clamps() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.426), "43%");
        assert_eq!(percent_label(1.0), "100%");
        assert_eq!(percent_label(1.7), "100%");
        assert_eq!(percent_label(-0.2), "0%");
    }
}
