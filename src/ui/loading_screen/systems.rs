// src/ui/loading_screen/systems.rs
//
// Systems for spawning, updating, and hiding the loading overlay.

use bevy::prelude::*;

use crate::room::{
    components::{RoomLoad, RoomLoadStatus},
    progress::percent_label,
};

use super::components::{LoadingProgressText, LoadingScreen};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.02, 0.02, 0.03, 0.96);
const TEXT_COLOR: Color = Color::srgb(0.95, 0.9, 0.75);
const ERROR_COLOR: Color = Color::srgb(0.95, 0.35, 0.3);
const FONT_SIZE: f32 = 28.0;

/// Spawn the full-screen overlay with a centred progress label.
pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            LoadingScreen,
            Name::new("Loading Screen"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(percent_label(0.0)),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                LoadingProgressText,
            ));
        });
}

/// Text shown on the overlay for a given load status.
pub fn overlay_label(status: &RoomLoadStatus) -> String {
    match status {
        RoomLoadStatus::Failed { .. } => "Failed to load the room".to_string(),
        other => percent_label(other.progress()),
    }
}

/// Mirror the room load status on the overlay; hide it once the room is ready.
pub fn update_loading_screen(
    load: Option<Res<RoomLoad>>,
    mut screens: Query<&mut Node, With<LoadingScreen>>,
    mut labels: Query<(&mut Text, &mut TextColor), With<LoadingProgressText>>,
) {
    let Some(load) = load else {
        return;
    };
    if !load.is_changed() {
        return;
    }

    let label = overlay_label(&load.status);
    for (mut text, mut color) in labels.iter_mut() {
        if text.0 != label {
            text.0 = label.clone();
        }
        if matches!(load.status, RoomLoadStatus::Failed { .. }) {
            color.0 = ERROR_COLOR;
        }
    }

    if load.status == RoomLoadStatus::Ready {
        for mut node in screens.iter_mut() {
            if node.display != Display::None {
                info!("Room ready; hiding loading screen");
                node.display = Display::None;
            }
        }
    }
}
