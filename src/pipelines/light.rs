use wgpu::util::DeviceExt;

/// The scene's lights: one point light and one directional light.
#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(uniform: LightUniform, device: &wgpu::Device) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    /// Point light strength, attenuated by the squared distance in the shader.
    pub intensity: f32,
    pub color: [f32; 3],
    // Uniforms require 16 byte (4 float) spacing
    _padding: u32,
    /// Direction the light travels in, towards the scene.
    pub direction: [f32; 3],
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
    _padding2: u32,
}

impl LightUniform {
    /// `directional_from` is the position the directional light shines from,
    /// towards the origin.
    pub fn new(
        position: [f32; 3],
        color: [f32; 3],
        intensity: f32,
        directional_from: [f32; 3],
        directional_color: [f32; 3],
        directional_intensity: f32,
    ) -> Self {
        let [x, y, z] = directional_from;
        let len = (x * x + y * y + z * z).sqrt();
        let direction = if len > 0.0 {
            [-x / len, -y / len, -z / len]
        } else {
            [0.0, -1.0, 0.0]
        };
        Self {
            position,
            intensity,
            color,
            _padding: 0,
            direction,
            directional_intensity,
            directional_color,
            _padding2: 0,
        }
    }
}

impl Default for LightUniform {
    fn default() -> Self {
        Self::new(
            [0.0, 20.0, 0.0],
            [1.0, 1.0, 1.0],
            100.0,
            [5.0, 4.0, 14.0],
            [1.0, 1.0, 1.0],
            1.0,
        )
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Uniform Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_four_vec4s() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
    }

    #[test]
    fn directional_light_points_at_the_origin() {
        let light = LightUniform::new([0.0; 3], [1.0; 3], 1.0, [0.0, 10.0, 0.0], [1.0; 3], 1.0);
        assert_eq!(light.direction, [0.0, -1.0, 0.0]);
        let fallback = LightUniform::new([0.0; 3], [1.0; 3], 1.0, [0.0; 3], [1.0; 3], 1.0);
        assert_eq!(fallback.direction, [0.0, -1.0, 0.0]);
    }
}
