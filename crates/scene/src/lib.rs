//! Viewer scene state: the loaded model's orientation, material, and the
//! in-flight orientation tween.
//!
//! # Invariants
//! - The scene owns the truth; renderers derive from it and never mutate it.
//! - All state mutations flow through explicit operations.
//! - Orientation stays unit length (tween steps renormalize).

pub mod state;

pub use state::{ModelInfo, SceneState, initial_pose};
