use gltf::mesh::util::ReadIndices;
use std::path::Path;

use crate::AssetError;
use crate::mesh::{CpuMesh, CpuTexture};

const DRACO_EXTENSION: &str = "KHR_draco_mesh_compression";

/// Load a `.gltf`/`.glb` file, merging all primitives into a single mesh,
/// and return it with the first base-color texture found (white fallback).
pub fn load_gltf_model(path: &Path) -> Result<(CpuMesh, CpuTexture), AssetError> {
    // Documents requiring an extension the importer does not implement fail
    // validation; Draco compression is the one such extension these models
    // carry in practice.
    let (doc, buffers, images) = match gltf::import(path) {
        Ok(ok) => ok,
        Err(gltf::Error::Validation(errors))
            if errors
                .iter()
                .any(|(_, e)| matches!(e, gltf::json::validation::Error::Unsupported)) =>
        {
            return Err(AssetError::DracoUnsupported(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    if doc.extensions_required().any(|e| e == DRACO_EXTENSION) {
        return Err(AssetError::DracoUnsupported(path.to_path_buf()));
    }

    let mut mesh = CpuMesh::default();
    for doc_mesh in doc.meshes() {
        for prim in doc_mesh.primitives() {
            let reader = prim.reader(|b| buffers.get(b.index()).map(|bb| bb.0.as_slice()));
            let pos = match reader.read_positions() {
                Some(it) => it.collect::<Vec<[f32; 3]>>(),
                None => continue,
            };
            let nrm: Vec<[f32; 3]> = match reader.read_normals() {
                Some(it) => it.collect(),
                None => vec![[0.0, 1.0, 0.0]; pos.len()],
            };
            let uv_set = prim
                .material()
                .pbr_metallic_roughness()
                .base_color_texture()
                .map(|ti| ti.tex_coord())
                .unwrap_or(0);
            let uv: Vec<[f32; 2]> = match reader.read_tex_coords(uv_set).map(|tc| tc.into_f32()) {
                Some(it) => it.collect(),
                // Planar projection fallback for untextured primitives.
                None => pos.iter().map(|p| [0.5 + 0.5 * p[0], 0.5 - 0.5 * p[2]]).collect(),
            };

            let base = mesh.positions.len() as u32;
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ReadIndices::U8(it)) => it.map(|v| v as u32).collect(),
                Some(ReadIndices::U16(it)) => it.map(|v| v as u32).collect(),
                Some(ReadIndices::U32(it)) => it.collect(),
                None => (0..pos.len() as u32).collect(),
            };
            mesh.indices.extend(indices.into_iter().map(|v| base + v));
            mesh.positions.extend(pos);
            mesh.normals.extend(nrm);
            mesh.uvs.extend(uv);
        }
    }

    if mesh.positions.is_empty() || mesh.indices.is_empty() {
        return Err(AssetError::NoGeometry(path.to_path_buf()));
    }

    let texture = base_color_texture(&doc, &images).unwrap_or_else(CpuTexture::white);
    tracing::debug!(
        "loaded {}: {} vertices, {} triangles, texture {}x{}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        texture.width,
        texture.height
    );
    Ok((mesh, texture))
}

/// First base-color texture in the document, expanded to RGBA8.
fn base_color_texture(doc: &gltf::Document, images: &[gltf::image::Data]) -> Option<CpuTexture> {
    let texinfo = doc
        .meshes()
        .flat_map(|m| m.primitives())
        .find_map(|p| p.material().pbr_metallic_roughness().base_color_texture())?;
    let img = images.get(texinfo.texture().source().index())?;
    let (width, height) = (img.width, img.height);
    let pixels = match img.format {
        gltf::image::Format::R8G8B8A8 => img.pixels.clone(),
        gltf::image::Format::R8G8B8 => {
            let mut out = Vec::with_capacity((width * height * 4) as usize);
            for c in img.pixels.chunks_exact(3) {
                out.extend_from_slice(&[c[0], c[1], c[2], 255]);
            }
            out
        }
        gltf::image::Format::R8 => {
            let mut out = Vec::with_capacity((width * height * 4) as usize);
            for &r in &img.pixels {
                out.extend_from_slice(&[r, r, r, 255]);
            }
            out
        }
        _ => return None,
    };
    Some(CpuTexture {
        pixels,
        width,
        height,
    })
}
