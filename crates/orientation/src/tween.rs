use glam::Quat;
use trinket_common::TweenSettings;

/// Slerp-toward-target interpolation state.
///
/// Each frame, an active tween moves the current orientation a constant
/// fraction of the remaining arc toward the target. Once the angular
/// distance falls below the settle threshold the tween deactivates and the
/// orientation stops moving. Retargeting mid-flight overwrites the target
/// and re-arms the tween.
#[derive(Debug, Clone, Copy)]
pub struct OrientationTween {
    target: Quat,
    settings: TweenSettings,
    active: bool,
}

impl Default for OrientationTween {
    fn default() -> Self {
        Self::new(TweenSettings::default())
    }
}

impl OrientationTween {
    pub fn new(settings: TweenSettings) -> Self {
        Self {
            target: Quat::IDENTITY,
            settings: settings.clamped(),
            active: false,
        }
    }

    /// Set a new target and arm the tween. Any in-flight interpolation is
    /// simply redirected; nothing is queued.
    pub fn retarget(&mut self, target: Quat) {
        self.target = target.normalize();
        self.active = true;
    }

    /// Deactivate without moving the orientation.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Quat {
        self.target
    }

    pub fn settings(&self) -> TweenSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: TweenSettings) {
        self.settings = settings.clamped();
    }

    /// Angular distance (radians) from `current` to the target.
    pub fn remaining(&self, current: Quat) -> f32 {
        current.angle_between(self.target)
    }

    /// Advance one frame: slerp `current` toward the target and return the
    /// new orientation. Inactive tweens return `current` unchanged.
    pub fn step(&mut self, current: Quat) -> Quat {
        if !self.active {
            return current;
        }
        let next = current.slerp(self.target, self.settings.blend).normalize();
        if next.angle_between(self.target) < self.settings.settle_threshold {
            self.active = false;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn settings(blend: f32, settle_threshold: f32) -> TweenSettings {
        TweenSettings {
            blend,
            settle_threshold,
        }
    }

    #[test]
    fn inactive_tween_is_a_no_op() {
        let mut tween = OrientationTween::default();
        let q = Quat::from_rotation_y(1.0);
        assert_eq!(tween.step(q), q);
    }

    #[test]
    fn converges_monotonically_and_halts() {
        let mut tween = OrientationTween::new(settings(0.02, 0.01));
        let target = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        tween.retarget(target);

        let mut current = Quat::IDENTITY;
        let mut last_distance = current.angle_between(target);
        let mut steps = 0u32;
        while tween.is_active() {
            current = tween.step(current);
            let distance = current.angle_between(target);
            assert!(
                distance < last_distance,
                "distance must shrink every step ({distance} >= {last_distance})"
            );
            last_distance = distance;
            steps += 1;
            assert!(steps < 10_000, "tween failed to converge");
        }
        assert!(last_distance < 0.01);
        // Once settled the orientation stops moving.
        assert_eq!(tween.step(current), current);
    }

    #[test]
    fn larger_blend_converges_faster() {
        let target = Quat::from_axis_angle(Vec3::X, PI * 0.9);
        let run = |blend: f32| {
            let mut tween = OrientationTween::new(settings(blend, 0.05));
            tween.retarget(target);
            let mut current = Quat::IDENTITY;
            let mut steps = 0u32;
            while tween.is_active() {
                current = tween.step(current);
                steps += 1;
            }
            steps
        };
        assert!(run(0.55) < run(0.02));
    }

    #[test]
    fn retarget_overwrites_in_flight_target() {
        let mut tween = OrientationTween::new(settings(0.5, 0.01));
        let first = Quat::from_rotation_y(FRAC_PI_2);
        let second = Quat::from_rotation_x(FRAC_PI_2);
        tween.retarget(first);

        let mut current = tween.step(Quat::IDENTITY);
        tween.retarget(second);
        assert!(tween.is_active());
        assert!((tween.target().dot(second)).abs() > 0.999);

        for _ in 0..200 {
            current = tween.step(current);
        }
        assert!(current.angle_between(second) < 0.01);
    }

    #[test]
    fn step_preserves_unit_length() {
        let mut tween = OrientationTween::new(settings(0.02, 0.001));
        tween.retarget(Quat::from_rotation_z(2.0));
        let mut current = Quat::from_rotation_y(0.3);
        for _ in 0..500 {
            current = tween.step(current);
            assert!((current.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn cancel_freezes_orientation() {
        let mut tween = OrientationTween::default();
        tween.retarget(Quat::from_rotation_y(1.0));
        tween.cancel();
        assert!(!tween.is_active());
        let q = Quat::from_rotation_x(0.5);
        assert_eq!(tween.step(q), q);
    }

    #[test]
    fn settings_are_clamped_on_construction() {
        let tween = OrientationTween::new(settings(0.0, -1.0));
        assert!(tween.settings().blend > 0.0);
        assert!(tween.settings().settle_threshold > 0.0);
    }
}
