use glam::{Mat4, Vec3};

/// Orbit camera circling a target point.
/// Right-mouse drag orbits, the scroll wheel zooms; the target stays fixed.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the original viewer camera: eye (27, 27, 27) looking at
        // the origin, 55 degree fov, near 1, far 1000.
        let distance = Vec3::splat(27.0).length();
        Self {
            target: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: (27.0 / distance).asin(),
            distance,
            fov: 55.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 1000.0,
            sensitivity: 0.005,
            min_distance: 2.0,
            max_distance: 400.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        );
        self.target + dir * self.distance
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Zoom by scroll steps; positive steps move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance * (1.0 - steps * 0.1)).clamp(self.min_distance, self.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_original_eye() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!((eye - Vec3::splat(27.0)).length() < 1e-3);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut cam = OrbitCamera::default();
        cam.rotate(100.0, -40.0);
        assert!(((cam.eye() - cam.target).length() - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        for _ in 0..1000 {
            cam.zoom(1.0);
        }
        assert!(cam.distance >= cam.min_distance);
        for _ in 0..1000 {
            cam.zoom(-1.0);
        }
        assert!(cam.distance <= cam.max_distance);
    }
}
