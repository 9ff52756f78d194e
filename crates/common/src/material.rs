use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Upper bound of the metalness slider. The panel deliberately allows
/// overdriven values above 1.0.
pub const METALNESS_MAX: f32 = 5.0;

/// Surface material parameters editable from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Linear RGB base color.
    pub base_color: [f32; 3],
    /// Metalness in [0, METALNESS_MAX].
    pub metalness: f32,
    /// Roughness in [0, 1].
    pub roughness: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            base_color: parse_hex_color("#33553d").expect("default color is valid"),
            metalness: 3.1,
            roughness: 0.1,
        }
    }
}

impl MaterialParams {
    /// Clamp all parameters into their panel ranges.
    pub fn clamped(self) -> Self {
        Self {
            base_color: self.base_color.map(|c| c.clamp(0.0, 1.0)),
            metalness: self.metalness.clamp(0.0, METALNESS_MAX),
            roughness: self.roughness.clamp(0.0, 1.0),
        }
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) hex color into linear-ish RGB floats.
pub fn parse_hex_color(s: &str) -> Result<[f32; 3], ConfigError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(s.to_string()));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|b| b as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    };
    Ok([byte(0)?, byte(2)?, byte(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_matches_panel_defaults() {
        let m = MaterialParams::default();
        assert!((m.metalness - 3.1).abs() < 1e-6);
        assert!((m.roughness - 0.1).abs() < 1e-6);
        assert!((m.base_color[0] - 0x33 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_pulls_values_into_range() {
        let m = MaterialParams {
            base_color: [-1.0, 2.0, 0.5],
            metalness: 9.0,
            roughness: -0.5,
        }
        .clamped();
        assert_eq!(m.base_color, [0.0, 1.0, 0.5]);
        assert_eq!(m.metalness, METALNESS_MAX);
        assert_eq!(m.roughness, 0.0);
    }

    #[test]
    fn hex_color_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_color("000000").unwrap(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hex_color_rejects_garbage() {
        assert!(parse_hex_color("#33553").is_err());
        assert!(parse_hex_color("not a color").is_err());
        assert!(parse_hex_color("#gg5533").is_err());
    }

    #[test]
    fn material_serde_round_trip() {
        let m = MaterialParams::default();
        let json = serde_json::to_string(&m).unwrap();
        let back: MaterialParams = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
