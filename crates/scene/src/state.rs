use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};
use trinket_common::{MaterialParams, TweenSettings};
use trinket_orientation::{OrientationTween, PRESET_COUNT, PresetOrientations, random_target};

/// Summary of the loaded model for UI and tooling.
#[derive(Debug, Clone, Default)]
pub struct ModelInfo {
    pub name: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

/// Pose applied to a freshly loaded model (euler XYZ, matching the original
/// upright presentation of the asset).
pub fn initial_pose() -> Quat {
    Quat::from_euler(EulerRot::XYZ, -FRAC_PI_2, 0.0, PI)
}

/// The authoritative viewer state.
///
/// The render loop calls `advance_frame` once per frame; the input path
/// calls the snap/cycle/spin/reset operations. Both run on the same
/// single-threaded event loop.
#[derive(Debug, Clone)]
pub struct SceneState {
    orientation: Quat,
    material: MaterialParams,
    tween: OrientationTween,
    presets: PresetOrientations,
    face_cursor: usize,
    face_axes: Vec<Vec3>,
    centroid: Vec3,
    model: Option<ModelInfo>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(MaterialParams::default(), TweenSettings::default())
    }
}

impl SceneState {
    pub fn new(material: MaterialParams, tween: TweenSettings) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            material: material.clamped(),
            tween: OrientationTween::new(tween),
            presets: PresetOrientations::new(),
            face_cursor: 0,
            face_axes: Vec::new(),
            centroid: Vec3::ZERO,
            model: None,
        }
    }

    /// Attach a loaded model: record its stats, rotation axes, and centroid,
    /// and put it into the initial pose.
    pub fn attach_model(&mut self, info: ModelInfo, face_axes: Vec<Vec3>, centroid: Vec3) {
        tracing::info!(
            "model attached: {} ({} vertices, {} triangles, {} face axes)",
            info.name,
            info.vertex_count,
            info.triangle_count,
            face_axes.len()
        );
        self.model = Some(info);
        self.face_axes = face_axes;
        self.centroid = centroid;
        self.orientation = initial_pose();
        self.tween.cancel();
    }

    pub fn model(&self) -> Option<&ModelInfo> {
        self.model.as_ref()
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn material(&self) -> MaterialParams {
        self.material
    }

    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn face_cursor(&self) -> usize {
        self.face_cursor
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_active()
    }

    /// Angular distance (radians) left to the current target.
    pub fn remaining_angle(&self) -> f32 {
        self.tween.remaining(self.orientation)
    }

    /// The orientation the tween is heading toward.
    pub fn target_orientation(&self) -> Quat {
        self.tween.target()
    }

    /// Model matrix: orientation about the mesh's own center.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation) * Mat4::from_translation(-self.centroid)
    }

    /// Replace the material parameters (clamped).
    pub fn set_material(&mut self, material: MaterialParams) {
        self.material = material.clamped();
    }

    pub fn set_tween_settings(&mut self, settings: TweenSettings) {
        self.tween.set_settings(settings);
    }

    /// Begin interpolating toward preset face `index`. Out-of-range indices
    /// are ignored.
    pub fn snap_to_face(&mut self, index: usize) -> bool {
        let Some(target) = self.presets.get(index) else {
            return false;
        };
        self.face_cursor = index;
        self.tween.retarget(target);
        true
    }

    /// Advance to the next preset face, wrapping past the last one.
    pub fn cycle_face(&mut self) {
        let next = (self.face_cursor + 1) % PRESET_COUNT;
        self.snap_to_face(next);
    }

    /// Begin interpolating toward a random rotation about one of the mesh's
    /// face normals. Falls back to the preset normals before a model is
    /// attached.
    pub fn spin_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = if self.face_axes.is_empty() {
            random_target(rng, &trinket_orientation::dodecahedron_face_normals())
        } else {
            random_target(rng, &self.face_axes)
        };
        if let Some(target) = target {
            self.tween.retarget(target);
        }
    }

    /// Snap the orientation back to identity immediately.
    pub fn reset_orientation(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.tween.cancel();
    }

    /// Per-frame update: one tween step when a rotation is pending.
    /// Returns true while the orientation is still moving.
    pub fn advance_frame(&mut self) -> bool {
        if !self.tween.is_active() {
            return false;
        }
        self.orientation = self.tween.step(self.orientation);
        self.tween.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn converge(scene: &mut SceneState) -> u32 {
        let mut steps = 0u32;
        while scene.advance_frame() {
            steps += 1;
            assert!(steps < 10_000, "scene failed to settle");
        }
        steps
    }

    #[test]
    fn snap_arms_tween_and_converges() {
        let mut scene = SceneState::default();
        assert!(scene.snap_to_face(3));
        assert!(scene.is_animating());

        converge(&mut scene);
        assert!(!scene.is_animating());
        assert!(scene.remaining_angle() < 0.22);
    }

    #[test]
    fn out_of_range_face_is_ignored() {
        let mut scene = SceneState::default();
        assert!(!scene.snap_to_face(PRESET_COUNT));
        assert!(!scene.is_animating());
    }

    #[test]
    fn cycle_wraps_past_last_face() {
        let mut scene = SceneState::default();
        for expected in 1..PRESET_COUNT {
            scene.cycle_face();
            assert_eq!(scene.face_cursor(), expected);
        }
        scene.cycle_face();
        assert_eq!(scene.face_cursor(), 0);
    }

    #[test]
    fn reset_restores_identity_immediately() {
        let mut scene = SceneState::default();
        scene.snap_to_face(5);
        scene.advance_frame();
        scene.reset_orientation();
        assert_eq!(scene.orientation(), Quat::IDENTITY);
        assert!(!scene.is_animating());
    }

    #[test]
    fn attach_model_applies_initial_pose() {
        let mut scene = SceneState::default();
        scene.attach_model(
            ModelInfo {
                name: "trinket".into(),
                vertex_count: 3,
                triangle_count: 1,
            },
            vec![Vec3::Z],
            Vec3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(scene.orientation(), initial_pose());
        assert_eq!(scene.centroid(), Vec3::new(1.0, 2.0, 3.0));
        assert!(scene.model().is_some());
    }

    #[test]
    fn model_matrix_recenters_before_rotating() {
        let mut scene = SceneState::default();
        scene.attach_model(ModelInfo::default(), Vec::new(), Vec3::new(0.0, 5.0, 0.0));
        scene.reset_orientation();
        // The centroid maps to the origin.
        let mapped = scene.model_matrix().transform_point3(Vec3::new(0.0, 5.0, 0.0));
        assert!(mapped.length() < 1e-5);
    }

    #[test]
    fn spin_random_uses_mesh_axes_when_present() {
        let mut scene = SceneState::default();
        scene.attach_model(ModelInfo::default(), vec![Vec3::X], Vec3::ZERO);
        scene.spin_random(&mut StdRng::seed_from_u64(1));
        assert!(scene.is_animating());
        let (axis, _) = scene.target_orientation().to_axis_angle();
        assert!(axis.dot(Vec3::X).abs() > 0.99);
    }

    #[test]
    fn spin_random_before_model_attach_still_works() {
        let mut scene = SceneState::default();
        scene.spin_random(&mut StdRng::seed_from_u64(2));
        assert!(scene.is_animating());
    }

    #[test]
    fn retarget_mid_flight_overwrites() {
        let mut scene = SceneState::default();
        scene.snap_to_face(0);
        for _ in 0..10 {
            scene.advance_frame();
        }
        scene.snap_to_face(7);
        assert_eq!(scene.face_cursor(), 7);
        converge(&mut scene);
        assert!(!scene.is_animating());
    }

    #[test]
    fn material_set_is_clamped() {
        let mut scene = SceneState::default();
        scene.set_material(MaterialParams {
            base_color: [5.0, -1.0, 0.5],
            metalness: 100.0,
            roughness: 2.0,
        });
        let m = scene.material();
        assert_eq!(m.base_color, [1.0, 0.0, 0.5]);
        assert_eq!(m.roughness, 1.0);
    }
}
