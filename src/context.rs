use std::sync::Arc;

use anyhow::Context as _;
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalPosition, window::Window};

use crate::{
    camera::{self, CameraResources, CameraUniform, Projection},
    data_structures::texture,
    pipelines::{
        basic::mk_basic_pipeline,
        light::{LightResources, LightUniform},
    },
    resources::material_layout,
};

/// Anything that keeps CPU-side state which has to be mirrored into GPU buffers.
pub trait BufferWriter {
    fn write_to_buffer(&mut self, ctx: &Context);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonState {
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub coords: PhysicalPosition<f64>,
    pub pressed: MouseButtonState,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            coords: (0.0, 0.0).into(),
            pressed: MouseButtonState::None,
        }
    }
}

#[derive(Debug)]
pub struct Pipelines {
    pub basic: wgpu::RenderPipeline,
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub pipelines: Pipelines,
    /// Group 0 of the basic pipeline: texture, sampler and material uniform.
    pub material_layout: wgpu::BindGroupLayout,
    pub clear_colour: wgpu::Color,
    pub tick_duration_millis: u64,
    pub mouse: MouseState,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("wgpu setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("could not create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no graphics adapter is compatible with the surface")?;

        log::info!("requesting device and queue from {:?}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("could not open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The shaders write linear colour and rely on an sRGB surface for the conversion.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("the surface reports no texture formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let camera = camera::Camera::new((0.0, 0.0, 0.0), 5.0, cgmath::Deg(0.0), cgmath::Deg(0.0));
        let projection =
            camera::Projection::new(config.width, config.height, cgmath::Deg(75.0), 0.1, 1000.0);
        let camera_controller = camera::CameraController::new(10.0, 0.4);

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(&camera, &projection);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
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
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let camera = CameraResources {
            camera,
            controller: camera_controller,
            uniform: camera_uniform,
            buffer: camera_buffer,
            bind_group: camera_bind_group,
            bind_group_layout: camera_bind_group_layout,
        };

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let light = LightResources::new(LightUniform::default(), &device);

        let material_layout = material_layout(&device);
        let pipelines = Pipelines {
            basic: mk_basic_pipeline(
                &device,
                &config,
                &material_layout,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
        };

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            pipelines,
            material_layout,
            clear_colour: wgpu::Color::BLACK,
            tick_duration_millis: 500,
            mouse: MouseState::default(),
        })
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Replaces the light uniform and uploads it.
    pub fn set_light(&mut self, uniform: LightUniform) {
        self.light.uniform = uniform;
        self.queue
            .write_buffer(&self.light.buffer, 0, bytemuck::cast_slice(&[uniform]));
    }
}

/// The subset of [`Context`] handed to flow constructors.
///
/// Device and queue are reference counted internally, cloning them only
/// clones the handle.
#[derive(Debug, Clone)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub material_layout: wgpu::BindGroupLayout,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            material_layout: ctx.material_layout.clone(),
        }
    }
}
