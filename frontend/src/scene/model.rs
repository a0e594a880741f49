//! Mesh asset loading and placement.

use crate::error::{SiteError, SiteResult};
use glam::{Mat3, Mat4, Vec3};
use gltf::buffer::Source;
use gltf::mesh::Mode;

/// One drawable primitive, already in model space.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshPart {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        (self.min + self.max) * 0.5
    }

    #[cfg(test)]
    fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        self.max - self.min
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub parts: Vec<MeshPart>,
}

impl Model {
    pub fn from_glb(bytes: &[u8]) -> SiteResult<Self> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let blob = gltf.blob.as_deref();
        let scene = gltf
            .default_scene()
            .or_else(|| gltf.scenes().next())
            .ok_or(SiteError::EmptyModel)?;

        let mut model = Model::default();
        for node in scene.nodes() {
            model.collect_node(&node, Mat4::IDENTITY, blob);
        }

        if model.parts.is_empty() {
            return Err(SiteError::EmptyModel);
        }
        log::info!(
            "Loaded model with {} parts, {} triangles",
            model.parts.len(),
            model.triangle_count()
        );
        Ok(model)
    }

    fn collect_node(&mut self, node: &gltf::Node, parent: Mat4, blob: Option<&[u8]>) {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != Mode::Triangles {
                    log::debug!("Skipping primitive with mode {:?}", primitive.mode());
                    continue;
                }
                if let Some(part) = read_primitive(&primitive, world, blob) {
                    self.parts.push(part);
                }
            }
        }
        for child in node.children() {
            self.collect_node(&child, world, blob);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.indices.len() / 3).sum()
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for part in &self.parts {
            for p in &part.positions {
                bounds.include(Vec3::from_array(*p));
            }
        }
        bounds
    }

    /// Translation that puts the centre of the bounding box at the origin.
    pub fn centering(&self) -> Mat4 {
        Mat4::from_translation(-self.bounds().center())
    }
}

fn read_primitive(primitive: &gltf::Primitive, world: Mat4, blob: Option<&[u8]>) -> Option<MeshPart> {
    let reader = primitive.reader(|buffer| match buffer.source() {
        Source::Bin => blob,
        Source::Uri(_) => None,
    });

    let positions: Vec<[f32; 3]> = reader
        .read_positions()?
        .map(|p| world.transform_point3(Vec3::from_array(p)).to_array())
        .collect();
    if positions.is_empty() {
        return None;
    }

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32 - positions.len() as u32 % 3).collect(),
    };
    if indices.len() < 3 || indices.iter().any(|&i| i as usize >= positions.len()) {
        return None;
    }

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let normals = match reader.read_normals() {
        Some(normals) => normals
            .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero().to_array())
            .collect(),
        None => smooth_normals(&positions, &indices),
    };

    let color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    Some(MeshPart {
        positions,
        normals,
        indices,
        color,
    })
}

/// Area-weighted vertex normals for meshes that ship without them.
pub fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from_array(positions[a]);
        let face = (Vec3::from_array(positions[b]) - pa).cross(Vec3::from_array(positions[c]) - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}

/// UV sphere used as the hover marker.
pub fn sphere(radius: f32, segments: u32, rings: u32, color: [f32; 4]) -> MeshPart {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let theta = v * std::f32::consts::PI;
        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let phi = u * std::f32::consts::TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            normals.push(n.to_array());
            positions.push((n * radius).to_array());
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::new();
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            if ring != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if ring != rings - 1 {
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }

    MeshPart {
        positions,
        normals,
        indices,
        color,
    }
}
