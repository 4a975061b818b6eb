//! Meshes, materials and the draw helpers that bind them.
//!
//! A [`Model`] is a list of meshes plus the materials they index into. Every
//! material owns a small uniform ([`MaterialUniform`]) next to its texture so
//! that colour and texture tiling can change at runtime without rebuilding the
//! bind group.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::data_structures::texture;

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for ModelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Per-material shading parameters as laid out in `basic.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub colour: [f32; 4],
    pub uv_repeat: [f32; 2],
    pub roughness: f32,
    pub metalness: f32,
    /// Blend from lit shading (0) to the plain albedo (1).
    pub emission: f32,
    _padding: [f32; 3],
}

impl MaterialUniform {
    /// Converts a `0xRRGGBB` colour into linear RGBA.
    pub fn from_hex(colour: u32, roughness: f32, metalness: f32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((colour >> shift) & 0xff) as f32 / 255.0);
        Self {
            colour: [channel(16), channel(8), channel(0), 1.0],
            uv_repeat: [1.0, 1.0],
            roughness,
            metalness,
            emission: 0.0,
            _padding: [0.0; 3],
        }
    }

    /// Ignores the scene lights and shows the texture as is.
    pub fn unlit(self) -> Self {
        Self {
            emission: 1.0,
            ..self
        }
    }
}

impl Default for MaterialUniform {
    fn default() -> Self {
        Self::from_hex(0xffffff, 0.5, 0.0)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A texture plus its shading uniform, bound as group 0 of the basic pipeline.
///
/// Cloning a material shares the GPU buffers, so writing the uniform through
/// one clone is visible to every mesh that uses it.
#[derive(Clone, Debug)]
pub struct Material {
    #[allow(unused)]
    pub name: String,
    pub diffuse_texture: texture::Texture,
    pub uniform: MaterialUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl Material {
    pub fn new(
        device: &wgpu::Device,
        name: &str,
        diffuse_texture: texture::Texture,
        uniform: MaterialUniform,
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Material Buffer")),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&diffuse_texture.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: buffer.as_entire_binding(),
                },
            ],
            label: Some(name),
        });

        Self {
            name: name.to_string(),
            diffuse_texture,
            uniform,
            buffer,
            bind_group,
        }
    }

    /// Updates the texture tiling. Returns `true` when the GPU copy was rewritten.
    pub fn set_uv_repeat(&mut self, queue: &wgpu::Queue, repeat: [f32; 2]) -> bool {
        if self.uniform.uv_repeat == repeat {
            return false;
        }
        self.uniform.uv_repeat = repeat;
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
        true
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    #[allow(unused)]
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
    pub material: usize,
}

#[derive(Clone, Debug)]
pub struct Model {
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

pub trait DrawModel<'a> {
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'a Mesh,
        material: &'a Material,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );

    fn draw_model_instanced(
        &mut self,
        model: &'a Model,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawModel<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'b Mesh,
        material: &'b Material,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, &material.bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        self.set_bind_group(2, light_bind_group, &[]);
        self.draw_indexed(0..mesh.num_elements, 0, instances);
    }

    fn draw_model_instanced(
        &mut self,
        model: &'b Model,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        for mesh in &model.meshes {
            match model.materials.get(mesh.material) {
                Some(material) => self.draw_mesh_instanced(
                    mesh,
                    material,
                    instances.clone(),
                    camera_bind_group,
                    light_bind_group,
                ),
                None => log::warn!(
                    "mesh {} references missing material {}",
                    mesh.name,
                    mesh.material
                ),
            }
        }
    }
}
