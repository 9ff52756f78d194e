use glam::Vec3;

/// A CPU-side triangle mesh, merged from all primitives of a model.
#[derive(Debug, Clone, Default)]
pub struct CpuMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl CpuMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max). Empty meshes report a zero box.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in &self.positions {
            let v = Vec3::from_array(*p);
            min = min.min(v);
            max = max.max(v);
        }
        if self.positions.is_empty() {
            (Vec3::ZERO, Vec3::ZERO)
        } else {
            (min, max)
        }
    }

    /// Center of the bounding box; the model matrix subtracts this so the
    /// mesh rotates about its own center.
    pub fn centroid(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    /// Geometric per-triangle face normals. Degenerate triangles are
    /// skipped. Used as rotation axes for the randomized spin.
    pub fn face_normals(&self) -> Vec<Vec3> {
        let mut normals = Vec::with_capacity(self.triangle_count());
        for tri in self.indices.chunks_exact(3) {
            let a = Vec3::from_array(self.positions[tri[0] as usize]);
            let b = Vec3::from_array(self.positions[tri[1] as usize]);
            let c = Vec3::from_array(self.positions[tri[2] as usize]);
            if let Some(n) = (b - a).cross(c - a).try_normalize() {
                normals.push(n);
            }
        }
        normals
    }

    /// Built-in unit cube, used when no model path is given.
    pub fn unit_cube() -> Self {
        let p = 0.5_f32;
        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0],  [[-p, -p,  p], [ p, -p,  p], [ p,  p,  p], [-p,  p,  p]]),
            ([0.0, 0.0, -1.0], [[ p, -p, -p], [-p, -p, -p], [-p,  p, -p], [ p,  p, -p]]),
            ([1.0, 0.0, 0.0],  [[ p, -p,  p], [ p, -p, -p], [ p,  p, -p], [ p,  p,  p]]),
            ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p,  p], [-p,  p,  p], [-p,  p, -p]]),
            ([0.0, 1.0, 0.0],  [[-p,  p,  p], [ p,  p,  p], [ p,  p, -p], [-p,  p, -p]]),
            ([0.0, -1.0, 0.0], [[-p, -p, -p], [ p, -p, -p], [ p, -p,  p], [-p, -p,  p]]),
        ];

        const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        let mut mesh = Self::default();
        for (normal, corners) in faces {
            let base = mesh.positions.len() as u32;
            for (i, corner) in corners.into_iter().enumerate() {
                mesh.positions.push(corner);
                mesh.normals.push(normal);
                mesh.uvs.push(CORNER_UVS[i]);
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        mesh
    }
}

/// An RGBA8 texture ready for upload.
#[derive(Debug, Clone)]
pub struct CpuTexture {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CpuTexture {
    /// 1x1 white fallback; modulating by the material color reproduces a
    /// flat-colored surface.
    pub fn white() -> Self {
        Self {
            pixels: vec![255, 255, 255, 255],
            width: 1,
            height: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_is_well_formed() {
        let cube = CpuMesh::unit_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), cube.vertex_count());
        assert_eq!(cube.uvs.len(), cube.vertex_count());
    }

    #[test]
    fn cube_bounds_and_centroid() {
        let cube = CpuMesh::unit_cube();
        let (min, max) = cube.bounds();
        assert_eq!(min, Vec3::splat(-0.5));
        assert_eq!(max, Vec3::splat(0.5));
        assert_eq!(cube.centroid(), Vec3::ZERO);
    }

    #[test]
    fn cube_face_normals_are_axis_aligned() {
        let cube = CpuMesh::unit_cube();
        let normals = cube.face_normals();
        assert_eq!(normals.len(), 12);
        for n in normals {
            assert!((n.length() - 1.0).abs() < 1e-5);
            let abs = n.abs();
            assert!(abs.max_element() > 0.999, "cube normals lie on an axis");
        }
    }

    #[test]
    fn degenerate_triangles_are_skipped() {
        let mesh = CpuMesh {
            positions: vec![[0.0; 3], [0.0; 3], [0.0; 3]],
            normals: vec![[0.0, 1.0, 0.0]; 3],
            uvs: vec![[0.0; 2]; 3],
            indices: vec![0, 1, 2],
        };
        assert!(mesh.face_normals().is_empty());
    }

    #[test]
    fn empty_mesh_bounds_are_zero() {
        let mesh = CpuMesh::default();
        assert_eq!(mesh.bounds(), (Vec3::ZERO, Vec3::ZERO));
        assert_eq!(mesh.centroid(), Vec3::ZERO);
    }

    #[test]
    fn white_texture_is_single_opaque_pixel() {
        let tex = CpuTexture::white();
        assert_eq!((tex.width, tex.height), (1, 1));
        assert_eq!(tex.pixels, vec![255; 4]);
    }
}
