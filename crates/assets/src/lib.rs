//! Asset import: glTF meshes with base-color textures and Radiance HDR
//! environment maps.
//!
//! The renderer consumes CPU-side data produced here; it never touches
//! asset files directly.

use std::path::PathBuf;

pub mod env;
pub mod gltf;
pub mod mesh;

pub use self::env::EnvironmentMap;
pub use self::gltf::load_gltf_model;
pub use self::mesh::{CpuMesh, CpuTexture};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("glTF import error: {0}")]
    Gltf(#[from] ::gltf::Error),
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("no geometry found in {0}")]
    NoGeometry(PathBuf),
    #[error("{0} requires KHR_draco_mesh_compression, which is not supported")]
    DracoUnsupported(PathBuf),
}
