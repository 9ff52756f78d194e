//! wgpu render backend: sky background, environment-lit mesh, axes helper,
//! orbit camera.
//!
//! # Invariants
//! - The renderer reads scene state; it never mutates it.
//! - GPU resources are created once; only uniforms change per frame.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
