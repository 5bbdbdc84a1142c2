use std::path::Path;

use bevy::prelude::*;

mod navigation;
mod room;
mod ui;

use crate::{navigation::NavigationPlugin, room::RoomPlugin, ui::UiPlugin};

fn main() {
    load_viewer_env();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "The King's Hall".to_string(),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }),
            NavigationPlugin,
            RoomPlugin, // Orders itself before NavigationSystems
            UiPlugin,
        ))
        .run();
}

fn load_viewer_env() {
    const ENV_FILE: &str = "viewer.env";

    let path = Path::new(ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", ENV_FILE, err);
    }
}
