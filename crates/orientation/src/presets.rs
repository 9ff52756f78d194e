use glam::{Quat, Vec3};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f32::consts::PI;

/// Number of preset orientations (one per dodecahedron face).
pub const PRESET_COUNT: usize = 12;

/// Rotation angle applied about each face normal to form a preset.
const FACE_ANGLE: f32 = PI / 5.0;

/// Bounds for the randomized spin angle (radians).
const SPIN_ANGLE_MIN: f32 = 0.3;
const SPIN_ANGLE_MAX: f32 = PI;

/// The 12 face normals of a regular dodecahedron: the normalized
/// icosahedron vertex directions (0, ±1, ±φ), (±1, ±φ, 0), (±φ, 0, ±1).
pub fn dodecahedron_face_normals() -> [Vec3; PRESET_COUNT] {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, 1.0),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, -1.0),
    ]
    .map(|v| v.normalize())
}

/// Fixed table of preset orientations, one per dodecahedron face.
#[derive(Debug, Clone)]
pub struct PresetOrientations {
    quats: [Quat; PRESET_COUNT],
}

impl Default for PresetOrientations {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetOrientations {
    pub fn new() -> Self {
        Self {
            quats: dodecahedron_face_normals()
                .map(|normal| Quat::from_axis_angle(normal, FACE_ANGLE)),
        }
    }

    pub fn get(&self, index: usize) -> Option<Quat> {
        self.quats.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.quats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Quat> + '_ {
        self.quats.iter().copied()
    }
}

/// A random rotation about an axis chosen uniformly from `axes`.
///
/// Returns `None` when `axes` is empty (no mesh loaded yet).
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, axes: &[Vec3]) -> Option<Quat> {
    let axis = axes.choose(rng)?;
    let axis = axis.try_normalize().unwrap_or(Vec3::Y);
    let angle = rng.random_range(SPIN_ANGLE_MIN..=SPIN_ANGLE_MAX);
    Some(Quat::from_axis_angle(axis, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn twelve_unit_presets() {
        let presets = PresetOrientations::new();
        assert_eq!(presets.len(), PRESET_COUNT);
        for q in presets.iter() {
            assert!((q.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn presets_are_pairwise_distinct() {
        let presets = PresetOrientations::new();
        let all: Vec<Quat> = presets.iter().collect();
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert!(
                    all[i].angle_between(all[j]) > 1e-3,
                    "presets {i} and {j} coincide"
                );
            }
        }
    }

    #[test]
    fn out_of_range_index_is_none() {
        let presets = PresetOrientations::new();
        assert!(presets.get(PRESET_COUNT).is_none());
        assert!(presets.get(0).is_some());
    }

    #[test]
    fn face_normals_are_unit_length() {
        for n in dodecahedron_face_normals() {
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn random_target_is_deterministic_under_seed() {
        let axes = dodecahedron_face_normals();
        let a = random_target(&mut StdRng::seed_from_u64(7), &axes).unwrap();
        let b = random_target(&mut StdRng::seed_from_u64(7), &axes).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_target_is_unit_and_within_angle_bounds() {
        let axes = dodecahedron_face_normals();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let q = random_target(&mut rng, &axes).unwrap();
            assert!((q.length() - 1.0).abs() < 1e-5);
            let angle = Quat::IDENTITY.angle_between(q);
            assert!(angle >= SPIN_ANGLE_MIN - 1e-4);
            assert!(angle <= SPIN_ANGLE_MAX + 1e-4);
        }
    }

    #[test]
    fn random_target_without_axes_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_target(&mut rng, &[]).is_none());
    }

    #[test]
    fn degenerate_axis_falls_back_to_y() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = random_target(&mut rng, &[Vec3::ZERO]).unwrap();
        let (axis, _) = q.to_axis_angle();
        assert!((axis.dot(Vec3::Y)).abs() > 0.999);
    }
}
