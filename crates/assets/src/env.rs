use std::path::Path;

use crate::AssetError;

/// An equirectangular environment map with linear RGBA32F pixels.
///
/// Decoded from a Radiance `.hdr` file; used both as the background and as
/// the light source (irradiance along normals, reflections along the
/// mirrored view ray).
#[derive(Debug, Clone)]
pub struct EnvironmentMap {
    pub pixels: Vec<f32>,
    pub width: u32,
    pub height: u32,
}

impl EnvironmentMap {
    /// Decode an environment map from disk. Any format the image crate
    /// understands is accepted; LDR sources are widened to float.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let decoded = image::open(path)?.to_rgba32f();
        let (width, height) = decoded.dimensions();
        tracing::debug!("loaded environment {}: {width}x{height}", path.display());
        Ok(Self {
            pixels: decoded.into_raw(),
            width,
            height,
        })
    }

    /// Built-in neutral sky gradient, used when no environment file is
    /// given or it fails to load.
    pub fn neutral() -> Self {
        let (width, height) = (4u32, 8u32);
        let zenith = [0.35, 0.52, 0.85];
        let horizon = [0.72, 0.74, 0.78];
        let ground = [0.22, 0.2, 0.18];

        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            // v = 0 at the zenith, 1 at the nadir.
            let v = (y as f32 + 0.5) / height as f32;
            let rgb = if v < 0.5 {
                let t = v / 0.5;
                [
                    zenith[0] + (horizon[0] - zenith[0]) * t,
                    zenith[1] + (horizon[1] - zenith[1]) * t,
                    zenith[2] + (horizon[2] - zenith[2]) * t,
                ]
            } else {
                ground
            };
            for _ in 0..width {
                pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 1.0]);
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Mean radiance over all pixels; a cheap ambient term for tooling.
    pub fn average_radiance(&self) -> [f32; 3] {
        let count = (self.width * self.height) as f32;
        if count == 0.0 {
            return [0.0; 3];
        }
        let mut sum = [0.0f32; 3];
        for px in self.pixels.chunks_exact(4) {
            sum[0] += px[0];
            sum[1] += px[1];
            sum[2] += px[2];
        }
        sum.map(|c| c / count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // 1x1 Radiance file; RGBE (128, 128, 128, 129) decodes to 1.0.
    fn write_hdr() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".hdr").tempfile().unwrap();
        file.write_all(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 1\n")
            .unwrap();
        file.write_all(&[128, 128, 128, 129]).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn decodes_handwritten_radiance_file() {
        let file = write_hdr();
        let env = EnvironmentMap::load(file.path()).unwrap();
        assert_eq!((env.width, env.height), (1, 1));
        assert_eq!(env.pixels.len(), 4);
        assert!((env.pixels[0] - 1.0).abs() < 1e-3);
        assert!((env.pixels[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = EnvironmentMap::load(Path::new("/nonexistent/sky.hdr")).unwrap_err();
        assert!(matches!(err, AssetError::Image(_) | AssetError::Io(_)));
    }

    #[test]
    fn neutral_sky_has_expected_shape() {
        let env = EnvironmentMap::neutral();
        assert_eq!(env.pixels.len(), (env.width * env.height * 4) as usize);
        // Zenith row is bluer than the ground row.
        let top = &env.pixels[..4];
        let bottom = &env.pixels[env.pixels.len() - 4..];
        assert!(top[2] > bottom[2]);
    }

    #[test]
    fn average_radiance_of_uniform_map_is_uniform() {
        let env = EnvironmentMap {
            pixels: vec![0.5; 16],
            width: 2,
            height: 2,
        };
        let avg = env.average_radiance();
        for c in avg {
            assert!((c - 0.5).abs() < 1e-6);
        }
    }
}
