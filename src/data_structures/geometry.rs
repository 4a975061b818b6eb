//! Procedural primitive geometry.
//!
//! Geometry is generated on the CPU and uploaded exactly once with
//! [`Geometry::to_mesh`]. Everything that changes afterwards (position,
//! scale, texture tiling) lives in instance transforms and material uniforms.

use wgpu::util::DeviceExt;

use crate::data_structures::model::{self, ModelVertex};

#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

/// One face of a cuboid: outward normal and the two in-plane axes.
///
/// `right x up == normal` keeps the winding counter-clockwise from outside.
struct Face {
    normal: [f32; 3],
    right: [f32; 3],
    up: [f32; 3],
}

#[rustfmt::skip]
const CUBOID_FACES: [Face; 6] = [
    Face { normal: [ 0.0,  0.0,  1.0], right: [ 1.0, 0.0,  0.0], up: [0.0, 1.0,  0.0] },
    Face { normal: [ 0.0,  0.0, -1.0], right: [-1.0, 0.0,  0.0], up: [0.0, 1.0,  0.0] },
    Face { normal: [ 1.0,  0.0,  0.0], right: [ 0.0, 0.0, -1.0], up: [0.0, 1.0,  0.0] },
    Face { normal: [-1.0,  0.0,  0.0], right: [ 0.0, 0.0,  1.0], up: [0.0, 1.0,  0.0] },
    Face { normal: [ 0.0,  1.0,  0.0], right: [ 1.0, 0.0,  0.0], up: [0.0, 0.0, -1.0] },
    Face { normal: [ 0.0, -1.0,  0.0], right: [ 1.0, 0.0,  0.0], up: [0.0, 0.0,  1.0] },
];

impl Geometry {
    /// An axis-aligned box centred at the origin.
    ///
    /// Each face maps the full texture once, with `(0, 0)` in its top-left corner.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let half = [width / 2.0, height / 2.0, depth / 2.0];
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for face in CUBOID_FACES.iter() {
            let base = vertices.len() as u32;
            // bottom-left, bottom-right, top-right, top-left
            for (r, u, tex_coords) in [
                (-1.0, -1.0, [0.0, 1.0]),
                (1.0, -1.0, [1.0, 1.0]),
                (1.0, 1.0, [1.0, 0.0]),
                (-1.0, 1.0, [0.0, 0.0]),
            ] {
                let position = std::array::from_fn(|axis| {
                    (face.normal[axis] + face.right[axis] * r + face.up[axis] * u) * half[axis]
                });
                vertices.push(ModelVertex {
                    position,
                    tex_coords,
                    normal: face.normal,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self { vertices, indices }
    }

    /// A UV sphere centred at the origin.
    ///
    /// `segments` divide the equator, `rings` go from pole to pole.
    pub fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);
        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

        for ring in 0..=rings {
            let phi = std::f32::consts::PI * ring as f32 / rings as f32;
            let y = phi.cos();
            let ring_radius = phi.sin();

            for seg in 0..=segments {
                let theta = 2.0 * std::f32::consts::PI * seg as f32 / segments as f32;
                let x = ring_radius * theta.cos();
                let z = ring_radius * theta.sin();

                vertices.push(ModelVertex {
                    position: [x * radius, y * radius, z * radius],
                    tex_coords: [seg as f32 / segments as f32, ring as f32 / rings as f32],
                    normal: [x, y, z],
                });
            }
        }

        for ring in 0..rings {
            for seg in 0..segments {
                let current = ring * (segments + 1) + seg;
                let next = current + segments + 1;

                indices.extend_from_slice(&[current, current + 1, next]);
                indices.extend_from_slice(&[current + 1, next + 1, next]);
            }
        }

        Self { vertices, indices }
    }

    /// Turns the surface to face inwards, for viewing from inside.
    pub fn inside_out(mut self) -> Self {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for vertex in &mut self.vertices {
            vertex.normal = vertex.normal.map(|n| -n);
        }
        self
    }

    /// Axis-aligned extents as `(min, max)`.
    #[cfg(test)]
    fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        self.vertices.iter().fold(
            ([f32::INFINITY; 3], [f32::NEG_INFINITY; 3]),
            |(mut min, mut max), v| {
                for axis in 0..3 {
                    min[axis] = min[axis].min(v.position[axis]);
                    max[axis] = max[axis].max(v.position[axis]);
                }
                (min, max)
            },
        )
    }

    pub fn to_mesh(&self, device: &wgpu::Device, name: &str, material: usize) -> model::Mesh {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        model::Mesh {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: self.indices.len() as u32,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::InnerSpace;

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn triangle_normal(g: &Geometry, tri: &[u32]) -> cgmath::Vector3<f32> {
        let p = |i: u32| cgmath::Vector3::from(g.vertices[i as usize].position);
        (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]))
    }

    #[test]
    fn cuboid_has_requested_extents() {
        let g = Geometry::cuboid(2.0, 0.2, 0.3);
        assert_eq!(g.vertices.len(), 24);
        assert_eq!(g.indices.len(), 36);
        let (min, max) = g.bounds();
        assert!(close(min[0], -1.0) && close(max[0], 1.0));
        assert!(close(min[1], -0.1) && close(max[1], 0.1));
        assert!(close(min[2], -0.15) && close(max[2], 0.15));
    }

    #[test]
    fn cuboid_triangles_face_outwards() {
        let g = Geometry::cuboid(1.0, 2.0, 3.0);
        for tri in g.indices.chunks(3) {
            let winding = triangle_normal(&g, tri);
            let normal = cgmath::Vector3::from(g.vertices[tri[0] as usize].normal);
            assert!(winding.dot(normal) > 0.0, "triangle {:?} winds inwards", tri);
        }
    }

    #[test]
    fn cuboid_maps_full_texture_per_face() {
        let g = Geometry::cuboid(1.0, 1.0, 1.0);
        for face in g.vertices.chunks(4) {
            let us: Vec<f32> = face.iter().map(|v| v.tex_coords[0]).collect();
            let vs: Vec<f32> = face.iter().map(|v| v.tex_coords[1]).collect();
            assert_eq!(us, vec![0.0, 1.0, 1.0, 0.0]);
            assert_eq!(vs, vec![1.0, 1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let g = Geometry::sphere(1.5, 16, 8);
        assert_eq!(g.vertices.len(), 17 * 9);
        assert_eq!(g.indices.len(), 16 * 8 * 6);
        for v in &g.vertices {
            let p = cgmath::Vector3::from(v.position);
            assert!(close(p.magnitude(), 1.5));
            assert!(close(cgmath::Vector3::from(v.normal).magnitude(), 1.0));
        }
    }

    #[test]
    fn sphere_triangles_face_outwards() {
        let g = Geometry::sphere(1.0, 12, 6);
        for tri in g.indices.chunks(3) {
            let winding = triangle_normal(&g, tri);
            // Triangles touching a pole are degenerate on one edge.
            if winding.magnitude() < 1e-6 {
                continue;
            }
            let centroid = tri
                .iter()
                .map(|&i| cgmath::Vector3::from(g.vertices[i as usize].position))
                .fold(cgmath::Vector3::new(0.0, 0.0, 0.0), |acc, p| acc + p);
            assert!(winding.dot(centroid) > 0.0, "triangle {:?} winds inwards", tri);
        }
    }

    #[test]
    fn inside_out_sphere_faces_its_centre() {
        let g = Geometry::sphere(2.0, 12, 6).inside_out();
        for tri in g.indices.chunks(3) {
            let winding = triangle_normal(&g, tri);
            if winding.magnitude() < 1e-6 {
                continue;
            }
            let centroid = tri
                .iter()
                .map(|&i| cgmath::Vector3::from(g.vertices[i as usize].position))
                .fold(cgmath::Vector3::new(0.0, 0.0, 0.0), |acc, p| acc + p);
            assert!(winding.dot(centroid) < 0.0, "triangle {:?} winds outwards", tri);
            let normal = cgmath::Vector3::from(g.vertices[tri[0] as usize].normal);
            assert!(winding.dot(normal) > 0.0, "triangle {:?} disagrees with its normal", tri);
        }
    }
}
