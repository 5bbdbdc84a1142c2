use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::{
    actions::{KeyBindings, NavAction},
    controller::{MovementConfig, DEFAULT_ANGULAR_SPEED, DEFAULT_LINEAR_SPEED},
};

const CONFIG_PATH: &str = "config/navigation.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawNavigationConfig {
    #[serde(default)]
    movement: RawMovement,
    #[serde(default)]
    bindings: RawBindings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovement {
    linear_speed: f32,
    angular_speed: f32,
}

impl Default for RawMovement {
    fn default() -> Self {
        Self {
            linear_speed: DEFAULT_LINEAR_SPEED,
            angular_speed: DEFAULT_ANGULAR_SPEED,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawBindings {
    forward: Vec<toml::Value>,
    back: Vec<toml::Value>,
    strafe_left: Vec<toml::Value>,
    strafe_right: Vec<toml::Value>,
    turn_left: Vec<toml::Value>,
    turn_right: Vec<toml::Value>,
}

impl RawBindings {
    /// Entries stay untyped until here so one bad key name only drops itself.
    fn names_for(&self, action: NavAction) -> &[toml::Value] {
        match action {
            NavAction::Forward => &self.forward,
            NavAction::Back => &self.back,
            NavAction::StrafeLeft => &self.strafe_left,
            NavAction::StrafeRight => &self.strafe_right,
            NavAction::TurnLeft => &self.turn_left,
            NavAction::TurnRight => &self.turn_right,
        }
    }
}

/// Navigation settings derived from `config/navigation.toml`.
#[derive(Debug, Clone)]
pub struct NavigationSettings {
    pub movement: MovementConfig,
    pub bindings: KeyBindings,
}

impl NavigationSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawNavigationConfig::default().into()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawNavigationConfig::default().into()
            }
        }
    }

    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawNavigationConfig>(raw).map(Into::into)
    }
}

impl From<RawNavigationConfig> for NavigationSettings {
    fn from(value: RawNavigationConfig) -> Self {
        let movement = MovementConfig {
            linear_speed: sanitise_speed(value.movement.linear_speed, DEFAULT_LINEAR_SPEED),
            angular_speed: sanitise_speed(value.movement.angular_speed, DEFAULT_ANGULAR_SPEED),
        };

        let mut bindings = KeyBindings::empty();
        for action in NavAction::ALL {
            for name in value.bindings.names_for(action) {
                match KeyCode::deserialize(name.clone()) {
                    Ok(key) => bindings.bind(key, action),
                    Err(_) => warn!("Ignoring {} binding {}: not a KeyCode name", action, name),
                }
            }
            if !bindings.is_bound(action) {
                bindings.bind(action.default_key(), action);
            }
        }

        Self { movement, bindings }
    }
}

fn sanitise_speed(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}
