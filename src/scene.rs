//! The door showcase: a background dome, a floor, two primitives and the
//! resizable door.

use std::pin::Pin;

use instant::Duration;
use winit::{
    event::{DeviceEvent, ElementState, KeyEvent, WindowEvent},
    keyboard::PhysicalKey,
};

use crate::{
    camera::{Camera, CameraController, Projection},
    config::SceneConfig,
    context::{BufferWriter, Context, InitContext},
    data_structures::{
        geometry::Geometry,
        instance::Instance,
        model::{Material, MaterialUniform},
        shape::ShapeNode,
    },
    door::node::DoorNode,
    flow::{self, FlowConstructor, GraphicsFlow, Out},
    render::Render,
    resources,
    ui::{DoorControls, DoorResize},
};

const FLOOR_ID: u32 = 1;
const CUBE_ID: u32 = 2;
const SPHERE_ID: u32 = 3;
const BACKGROUND_ID: u32 = 4;
const DOOR_ID_BASE: u32 = 10;
/// Inside the camera's zoom range, so zooming far out leaves the dome behind.
const BACKGROUND_RADIUS: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Resize(DoorResize),
}

#[derive(Debug)]
pub struct DoorScene {
    config: SceneConfig,
    background: ShapeNode,
    floor: ShapeNode,
    cube: ShapeNode,
    sphere: ShapeNode,
    door: DoorNode,
    controls: DoorControls,
}

impl DoorScene {
    pub async fn new(ctx: InitContext, config: SceneConfig) -> Self {
        let background_texture =
            resources::load_texture_or_checker(&config.background_texture, &ctx.device, &ctx.queue)
                .await;
        let background_material = Material::new(
            &ctx.device,
            "background",
            background_texture,
            MaterialUniform::default().unlit(),
            &ctx.material_layout,
        );
        let background = ShapeNode::new(
            &ctx,
            BACKGROUND_ID,
            "background",
            &Geometry::sphere(BACKGROUND_RADIUS, 48, 24).inside_out(),
            background_material,
            vec![Instance::new()],
        );

        let floor_texture =
            resources::load_texture_or_checker(&config.floor_texture, &ctx.device, &ctx.queue)
                .await;
        let floor_material = Material::new(
            &ctx.device,
            "floor",
            floor_texture,
            MaterialUniform::from_hex(0xcccccc, 0.5, 0.0),
            &ctx.material_layout,
        );
        let floor = ShapeNode::new(
            &ctx,
            FLOOR_ID,
            "floor",
            &Geometry::cuboid(10.0, 0.1, 10.0),
            floor_material,
            vec![Instance::from(cgmath::Vector3::new(0.0, -2.0, 0.0))],
        );

        let cube = ShapeNode::solid(
            &ctx,
            CUBE_ID,
            "cube",
            &Geometry::cuboid(1.0, 1.0, 1.0),
            MaterialUniform::from_hex(0x00ff00, 0.5, 0.5),
            Instance::from(cgmath::Vector3::new(-4.0, 0.0, 0.0)),
        );

        let sphere = ShapeNode::solid(
            &ctx,
            SPHERE_ID,
            "sphere",
            &Geometry::sphere(1.0, 32, 16),
            MaterialUniform::from_hex(0xff0000, 0.3, 1.0),
            Instance::from(cgmath::Vector3::new(4.0, 0.0, 0.0)),
        );

        let door = config.door.builder().build();
        let door = DoorNode::new(&ctx, door, Instance::new(), DOOR_ID_BASE).await;

        let controls = DoorControls::new(config.width_slider.into(), config.height_slider.into());

        Self {
            config,
            background,
            floor,
            cube,
            sphere,
            door,
            controls,
        }
    }

    fn apply_resize(&mut self, ctx: &Context, resize: DoorResize) {
        self.door.resize(resize.width, resize.height);
        self.door.write_to_buffer(ctx);
        ctx.set_title(&self.controls.title());
    }
}

impl GraphicsFlow<(), SceneEvent> for DoorScene {
    fn on_init(&mut self, ctx: &mut Context, _: &mut ()) -> Out<SceneEvent> {
        let camera = &self.config.camera;
        ctx.camera.camera = Camera::looking_at(camera.eye.into(), camera.target.into());
        ctx.camera.controller = CameraController::new(camera.speed, camera.sensitivity);
        ctx.projection = Projection::new(
            ctx.config.width,
            ctx.config.height,
            cgmath::Deg(camera.fovy),
            camera.znear,
            camera.zfar,
        );
        ctx.set_light(self.config.light.uniform());
        ctx.clear_colour = self.config.clear_colour;
        ctx.tick_duration_millis = self.config.tick_duration_millis;
        ctx.set_title(&self.controls.title());

        // Sliders and door may disagree when the door is configured with another size.
        Out::event(SceneEvent::Resize(self.controls.current()))
    }

    fn on_update(&mut self, ctx: &Context, _: &mut (), _: Duration) -> Out<SceneEvent> {
        self.door.write_to_buffer(ctx);
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut ()) -> Out<SceneEvent> {
        Out::Empty
    }

    fn on_device_events(&mut self, _: &Context, _: &mut (), _: &DeviceEvent) -> Out<SceneEvent> {
        Out::Empty
    }

    fn on_window_events(&mut self, _: &Context, _: &mut (), event: &WindowEvent) -> Out<SceneEvent> {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self
                .controls
                .handle_key(*code)
                .map(|resize| Out::event(SceneEvent::Resize(resize)))
                .unwrap_or_default(),
            _ => Out::Empty,
        }
    }

    fn on_custom_events(&mut self, ctx: &Context, _: &mut (), event: SceneEvent) -> Option<SceneEvent> {
        match event {
            SceneEvent::Resize(resize) => self.apply_resize(ctx, resize),
        }
        None
    }

    fn on_render(&self) -> Render<'_> {
        Render::Composed(vec![
            (&self.background).into(),
            (&self.floor).into(),
            (&self.cube).into(),
            (&self.sphere).into(),
            (&self.door).into(),
        ])
    }
}

/// Opens a window and runs the door scene until it is closed.
pub fn run_scene(config: SceneConfig) -> anyhow::Result<()> {
    let constructor: FlowConstructor<(), SceneEvent> = Box::new(move |ctx: InitContext| {
        let flow: Pin<Box<dyn Future<Output = Box<dyn GraphicsFlow<(), SceneEvent>>>>> =
            Box::pin(async move {
                let scene: Box<dyn GraphicsFlow<(), SceneEvent>> =
                    Box::new(DoorScene::new(ctx, config).await);
                scene
            });
        flow
    });
    flow::run(vec![constructor])
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    run_scene(SceneConfig::default()).map_err(|e| wasm_bindgen::JsValue::from_str(&format!("{e:#}")))
}
