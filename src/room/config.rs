//! Scene configuration: model path, camera, fog, and light rig.
use std::{env, fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/scene.toml";
/// Environment variable overriding `[model] path`.
pub const MODEL_PATH_ENV: &str = "HALL_VIEWER_MODEL";

#[derive(Debug, Clone, Deserialize)]
struct RawSceneConfig {
    #[serde(default)]
    model: RawModelSection,
    #[serde(default)]
    camera: RawCameraSection,
    #[serde(default)]
    fog: RawFogSection,
    #[serde(default)]
    ambient: RawAmbientSection,
    #[serde(default)]
    sun: RawSunSection,
    #[serde(default)]
    overhead: RawPointSection,
    #[serde(default = "default_interior_lights")]
    interior: Vec<RawInteriorLight>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawModelSection {
    path: String,
    start_offset: f32,
}

impl Default for RawModelSection {
    fn default() -> Self {
        Self {
            path: "the_king_s_hall/scene.gltf".to_string(),
            start_offset: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCameraSection {
    fov_degrees: f32,
    near: f32,
    far: f32,
    start_position: [f32; 3],
}

impl Default for RawCameraSection {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            start_position: [0.0, 0.0, 5.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawFogSection {
    color: [f32; 3],
    near: f32,
    far: f32,
}

impl Default for RawFogSection {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 0.77],
            near: 1000.0,
            far: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAmbientSection {
    color: [f32; 3],
    brightness: f32,
}

impl Default for RawAmbientSection {
    fn default() -> Self {
        Self {
            color: [0.45, 0.45, 0.45],
            brightness: 180.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSunSection {
    position: [f32; 3],
    illuminance: f32,
    shadows: bool,
}

impl Default for RawSunSection {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            illuminance: 8_000.0,
            shadows: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPointSection {
    position: [f32; 3],
    color: [f32; 3],
    intensity: f32,
    range: f32,
}

impl Default for RawPointSection {
    fn default() -> Self {
        Self {
            position: [5.0, 10.0, 5.0],
            color: [1.0, 1.0, 1.0],
            intensity: 800_000.0,
            range: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum RawLightKind {
    Point,
    Spot,
}

#[derive(Debug, Clone, Deserialize)]
struct RawInteriorLight {
    kind: RawLightKind,
    offset: [f32; 3],
    #[serde(default = "white")]
    color: [f32; 3],
    intensity: f32,
    #[serde(default = "default_range")]
    range: f32,
    #[serde(default)]
    shadows: bool,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_range() -> f32 {
    20.0
}

fn default_interior_lights() -> Vec<RawInteriorLight> {
    vec![
        RawInteriorLight {
            kind: RawLightKind::Point,
            offset: [2.0, 2.0, 0.0],
            color: white(),
            intensity: 200_000.0,
            range: 10.0,
            shadows: false,
        },
        RawInteriorLight {
            kind: RawLightKind::Point,
            offset: [-3.0, -1.0, -5.0],
            color: [1.0, 0.84, 0.0],
            intensity: 100_000.0,
            range: 20.0,
            shadows: false,
        },
        RawInteriorLight {
            kind: RawLightKind::Spot,
            offset: [0.0, 5.0, 0.0],
            color: white(),
            intensity: 400_000.0,
            range: 20.0,
            shadows: true,
        },
    ]
}

/// How an interior light is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorLightKind {
    Point,
    /// Aimed at the room centre.
    Spot,
}

/// Light placed relative to the room centre once the model has loaded.
#[derive(Debug, Clone)]
pub struct InteriorLight {
    pub kind: InteriorLightKind,
    pub offset: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
    pub shadows: bool,
}

#[derive(Debug, Clone)]
pub struct FogSettings {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone)]
pub struct CameraSettings {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
}

#[derive(Debug, Clone)]
pub struct SunSettings {
    pub position: Vec3,
    pub illuminance: f32,
    pub shadows: bool,
}

#[derive(Debug, Clone)]
pub struct PointSettings {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
}

/// Runtime scene configuration derived from `config/scene.toml`.
#[derive(Resource, Debug, Clone)]
pub struct SceneSettings {
    /// Asset path of the glTF room, relative to the asset root.
    pub model_path: String,
    /// Distance along +Z from the room centre where the camera starts.
    pub start_offset: f32,
    pub camera: CameraSettings,
    pub fog: FogSettings,
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    pub sun: SunSettings,
    pub overhead: PointSettings,
    pub interior: Vec<InteriorLight>,
}

impl SceneSettings {
    pub fn from_defaults() -> Self {
        RawSceneConfig::default().into()
    }

    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        let mut settings: Self = match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawSceneConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    Self::from_defaults()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::from_defaults()
            }
        };

        if let Some(model_path) = model_path_override(env::var(MODEL_PATH_ENV).ok()) {
            info!("{} overrides model path: {}", MODEL_PATH_ENV, model_path);
            settings.model_path = model_path;
        }
        settings
    }
}

impl Default for RawSceneConfig {
    fn default() -> Self {
        Self {
            model: RawModelSection::default(),
            camera: RawCameraSection::default(),
            fog: RawFogSection::default(),
            ambient: RawAmbientSection::default(),
            sun: RawSunSection::default(),
            overhead: RawPointSection::default(),
            interior: default_interior_lights(),
        }
    }
}

impl From<RawSceneConfig> for SceneSettings {
    fn from(value: RawSceneConfig) -> Self {
        let model_path = {
            let trimmed = value.model.path.trim();
            if trimmed.is_empty() {
                RawModelSection::default().path
            } else {
                trimmed.to_string()
            }
        };

        let camera = {
            let near = positive_or(value.camera.near, 0.1);
            CameraSettings {
                fov: value.camera.fov_degrees.clamp(10.0, 150.0).to_radians(),
                near,
                far: value.camera.far.max(near + 1.0),
                start_position: Vec3::from_array(value.camera.start_position),
            }
        };

        let fog_near = value.fog.near.max(0.0);
        let fog = FogSettings {
            color: rgb(value.fog.color),
            near: fog_near,
            far: value.fog.far.max(fog_near + f32::EPSILON),
        };

        let interior = value
            .interior
            .into_iter()
            .map(|light| InteriorLight {
                kind: match light.kind {
                    RawLightKind::Point => InteriorLightKind::Point,
                    RawLightKind::Spot => InteriorLightKind::Spot,
                },
                offset: Vec3::from_array(light.offset),
                color: rgb(light.color),
                intensity: light.intensity.max(0.0),
                range: positive_or(light.range, default_range()),
                shadows: light.shadows,
            })
            .collect();

        Self {
            model_path,
            start_offset: if value.model.start_offset.is_finite() {
                value.model.start_offset
            } else {
                RawModelSection::default().start_offset
            },
            camera,
            fog,
            ambient_color: rgb(value.ambient.color),
            ambient_brightness: value.ambient.brightness.max(0.0),
            sun: SunSettings {
                position: Vec3::from_array(value.sun.position),
                illuminance: value.sun.illuminance.max(0.0),
                shadows: value.sun.shadows,
            },
            overhead: PointSettings {
                position: Vec3::from_array(value.overhead.position),
                color: rgb(value.overhead.color),
                intensity: value.overhead.intensity.max(0.0),
                range: positive_or(value.overhead.range, 100.0),
            },
            interior,
        }
    }
}

fn rgb(channels: [f32; 3]) -> Color {
    let [r, g, b] = channels.map(|channel| channel.clamp(0.0, 1.0));
    Color::srgb(r, g, b)
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn model_path_override(value: Option<String>) -> Option<String> {
    value
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
}
