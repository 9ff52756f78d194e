use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::material::MaterialParams;

/// Smallest accepted blend factor. A blend of exactly zero would never
/// converge.
pub const MIN_BLEND: f32 = 1e-4;

/// Errors from configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}

/// Settings for the orientation tween.
///
/// `blend` is the constant slerp factor applied once per frame;
/// `settle_threshold` is the angular distance (radians) below which the
/// tween deactivates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSettings {
    pub blend: f32,
    pub settle_threshold: f32,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            blend: 0.02,
            settle_threshold: 0.22,
        }
    }
}

impl TweenSettings {
    /// Clamp settings into usable ranges.
    pub fn clamped(self) -> Self {
        Self {
            blend: self.blend.clamp(MIN_BLEND, 1.0),
            settle_threshold: self.settle_threshold.clamp(1e-3, std::f32::consts::PI),
        }
    }
}

/// Viewer configuration, loadable from a JSON file.
///
/// CLI flags take precedence over values found here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Path to the glTF model to display.
    pub model: Option<PathBuf>,
    /// Path to the Radiance HDR environment map.
    pub environment: Option<PathBuf>,
    /// Initial material parameters.
    pub material: MaterialParams,
    /// Orientation tween settings.
    pub tween: TweenSettings,
    /// Whether the axes helper is drawn.
    pub show_axes: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model: None,
            environment: None,
            material: MaterialParams::default(),
            tween: TweenSettings::default(),
            show_axes: true,
        }
    }
}

impl ViewerConfig {
    /// Load a configuration from a JSON file, clamping out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        Ok(config.clamped())
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn clamped(self) -> Self {
        Self {
            material: self.material.clamped(),
            tween: self.tween.clamped(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_defaults() {
        let t = TweenSettings::default();
        assert!((t.blend - 0.02).abs() < 1e-6);
        assert!((t.settle_threshold - 0.22).abs() < 1e-6);
    }

    #[test]
    fn tween_clamp_rejects_zero_blend() {
        let t = TweenSettings {
            blend: 0.0,
            settle_threshold: 100.0,
        }
        .clamped();
        assert_eq!(t.blend, MIN_BLEND);
        assert_eq!(t.settle_threshold, std::f32::consts::PI);
    }

    #[test]
    fn config_round_trip() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let config = ViewerConfig {
            model: Some(PathBuf::from("assets/trinket.glb")),
            environment: Some(PathBuf::from("assets/puresky_1k.hdr")),
            show_axes: true,
            ..ViewerConfig::default()
        };
        config.save(tmp.path()).unwrap();

        let loaded = ViewerConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), r#"{ "show_axes": false }"#).unwrap();

        let loaded = ViewerConfig::load(tmp.path()).unwrap();
        assert!(!loaded.show_axes);
        assert_eq!(loaded.material, MaterialParams::default());
        assert!(loaded.model.is_none());
    }

    #[test]
    fn load_clamps_out_of_range_values() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            r#"{ "material": { "base_color": [2.0, 0.5, 0.5], "metalness": 99.0, "roughness": 0.5 } }"#,
        )
        .unwrap();

        let loaded = ViewerConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded.material.base_color[0], 1.0);
        assert_eq!(loaded.material.metalness, crate::material::METALNESS_MAX);
    }
}
