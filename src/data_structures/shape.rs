use wgpu::util::DeviceExt;

use crate::{
    context::{BufferWriter, Context, InitContext},
    data_structures::{
        geometry::Geometry,
        instance::Instance,
        model::{self, MaterialUniform},
        texture::Texture,
    },
    render::{Instanced, Render},
};

/**
 * A `ShapeNode` is a generated mesh with a single material, drawn once per
 * instance.
 *
 * The mesh is uploaded when the node is created. Moving, rotating or scaling
 * the shape only rewrites the instance buffer.
 */
#[derive(Debug)]
pub struct ShapeNode {
    pub id: u32,
    pub model: model::Model,
    pub instances: Vec<Instance>,
    pub instance_buffer: wgpu::Buffer,
}

impl ShapeNode {
    pub fn new(
        ctx: &InitContext,
        id: u32,
        name: &str,
        geometry: &Geometry,
        material: model::Material,
        instances: Vec<Instance>,
    ) -> Self {
        let mesh = geometry.to_mesh(&ctx.device, name, 0);
        let model = model::Model {
            meshes: vec![mesh],
            materials: vec![material],
        };
        let instance_buffer = mk_instance_buffer(&ctx.device, name, &instances);
        Self {
            id,
            model,
            instances,
            instance_buffer,
        }
    }

    /// A single instance at `instance` with a solid colour material.
    pub fn solid(
        ctx: &InitContext,
        id: u32,
        name: &str,
        geometry: &Geometry,
        uniform: MaterialUniform,
        instance: Instance,
    ) -> Self {
        let white = Texture::create_solid([255; 4], &ctx.device, &ctx.queue, name);
        let material = model::Material::new(&ctx.device, name, white, uniform, &ctx.material_layout);
        Self::new(ctx, id, name, geometry, material, vec![instance])
    }

    pub fn material_mut(&mut self) -> Option<&mut model::Material> {
        self.model.materials.first_mut()
    }

    pub fn instanced(&self) -> Instanced<'_> {
        Instanced {
            instance: &self.instance_buffer,
            model: &self.model,
            amount: self.instances.len(),
            id: self.id,
        }
    }
}

impl BufferWriter for ShapeNode {
    fn write_to_buffer(&mut self, ctx: &Context) {
        let raw = self.instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        // The buffer cannot grow in place, new instances need a new allocation.
        if (self.instance_buffer.size() as usize) < std::mem::size_of_val(raw.as_slice()) {
            self.instance_buffer = mk_instance_buffer(&ctx.device, "Shape", &self.instances);
        } else {
            ctx.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raw));
        }
    }
}

pub(crate) fn mk_instance_buffer(
    device: &wgpu::Device,
    name: &str,
    instances: &[Instance],
) -> wgpu::Buffer {
    let instance_data = instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{name} Instance Buffer")),
        contents: bytemuck::cast_slice(&instance_data),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

impl<'a> From<&'a ShapeNode> for Render<'a> {
    fn from(shape: &'a ShapeNode) -> Self {
        Render::Default(shape.instanced())
    }
}
