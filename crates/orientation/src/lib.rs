//! Orientation interpolation: the per-frame rotate-toward-target rule.
//!
//! # Invariants
//! - The interpolated orientation is renormalized every step.
//! - A new target overwrites the old one; there is no queue.
//! - The tween deactivates once the angular distance drops below the
//!   settle threshold.

pub mod presets;
pub mod tween;

pub use presets::{PRESET_COUNT, PresetOrientations, dodecahedron_face_normals, random_target};
pub use tween::OrientationTween;
