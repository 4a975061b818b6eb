//! Flow control and application event loop.
//!
//! A "flow" is a self-contained part of the application that handles input,
//! updates its state and hands the engine something to render every frame.
//!
//! # User-facing types
//!
//! - [`GraphicsFlow<S, E>`] is the trait for scenes that handle events and rendering
//! - [`Out<E>`] is the output type for async event handling
//!
//! # Lifecycle Flow
//!
//! The event loop follows this pattern each frame:
//! 1. Collect window/device events
//! 2. Call `on_<device/window/custom>_events` on all flows
//! 3. Render every flow's [`Render`] with batched pipelines
//! 4. Update flow state (via `on_update` / `on_tick`) and the camera
//! 5. Present frame

use std::{fmt::Debug, iter, pin::Pin, sync::Arc};

use instant::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::{Context, InitContext, MouseButtonState},
    data_structures::{model::DrawModel, texture::Texture},
    render::{Instanced, Render},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Multiplier on mouse motion before it reaches the camera controller, which
/// turns it into radians using its sensitivity and the frame time.
const DRAG_SPEED: f64 = 5.0;

///
/// This is the Output Type for every lifecycle hook where a flow can pass async events.
///
/// `Out::FutEvent` resolves each future and puts the resulting event in the event queue,
/// where it is handed to `on_custom_events` of every flow until one consumes it.
///
/// `Empty` is the default output used when no eventing/futures need to be handled.
///
pub enum Out<E> {
    FutEvent(Vec<Box<dyn Future<Output = E>>>),
    Empty,
}

impl<E> Default for Out<E> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<E: 'static> Out<E> {
    /// An already resolved event.
    pub fn event(event: E) -> Self {
        Self::FutEvent(vec![Box::new(async move { event })])
    }
}

/// Trait for implementing a renderable scene.
///
/// # Lifecycle
///
/// 1. `on_init()` is called once when the flow is created; configure context (camera, clear color, etc.)
/// 2. `on_window_events()` and `on_device_events()` are called for each winit input event
/// 3. `on_update()` is called every frame
/// 4. `on_tick()` is called every `tick_duration_millis`
/// 5. `on_custom_events()` is called for custom application events
/// 6. `on_render()` is called each frame and specifies how to render `self`
///
pub trait GraphicsFlow<S, E> {
    /// Initialize the flow and configure the context.
    ///
    /// This is the only place to modify the Context and configure things such as the default
    /// background colour or camera start position.
    fn on_init(&mut self, ctx: &mut Context, state: &mut S) -> Out<E>;

    /// Update state every frame.
    fn on_update(&mut self, ctx: &Context, state: &mut S, dt: Duration) -> Out<E>;

    /// Update state periodically.
    ///
    /// Called every `tick_duration_millis` milliseconds (configurable via context).
    fn on_tick(&mut self, ctx: &Context, state: &mut S) -> Out<E>;

    /// Handle raw device events (mouse motion and other hardware input).
    fn on_device_events(&mut self, ctx: &Context, state: &mut S, event: &DeviceEvent) -> Out<E>;

    /// Handle window events (keyboard, mouse buttons, window resizing, etc.).
    fn on_window_events(&mut self, ctx: &Context, state: &mut S, event: &WindowEvent) -> Out<E>;

    /// Handle custom application events.
    ///
    /// Returns the event if it was not consumed, allowing it to be passed to
    /// the next flow. Returning `None` means the event was consumed.
    fn on_custom_events(&mut self, ctx: &Context, state: &mut S, event: E) -> Option<E>;

    /// Return renderable objects for this flow.
    fn on_render(&self) -> Render<'_>;
}

impl<State, Event> Debug for dyn GraphicsFlow<State, Event> + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GraphicsFlow")
    }
}

/// A flow constructor takes an `InitContext` and asynchronously returns a
/// boxed `GraphicsFlow`, which lets flows load their assets before the first frame.
pub type FlowConstructor<S, E> =
    Box<dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = Box<dyn GraphicsFlow<S, E>>>>>>;

/// Application state bundle: GPU context, app state, and surface status.
#[derive(Debug)]
pub struct AppState<State: 'static> {
    pub(crate) ctx: Context,
    state: State,
    is_surface_configured: bool,
}

impl<State: Default> AppState<State> {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = Context::new(window).await?;
        Ok(Self {
            ctx,
            state: State::default(),
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
            log::debug!("surface resized to {width} x {height}");
        }
    }

    fn render<Event>(
        &mut self,
        graphics_flows: &[Box<dyn GraphicsFlow<State, Event>>],
    ) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let mut basics: Vec<Instanced> = Vec::new();
            graphics_flows
                .iter()
                .for_each(|flow| flow.on_render().set_pipelines(&mut basics));

            render_pass.set_pipeline(&self.ctx.pipelines.basic);
            for instanced in basics {
                if instanced.amount == 0 || instanced.instance.size() == 0 {
                    log::warn!("skipping a draw with zero instances (id {})", instanced.id);
                    continue;
                }
                render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
                render_pass.draw_model_instanced(
                    instanced.model,
                    0..instanced.amount as u32,
                    &self.ctx.camera.bind_group,
                    &self.ctx.light.bind_group,
                );
            }
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn update_camera(&mut self, dt: Duration) {
        let camera = &mut self.ctx.camera;
        camera.controller.update(&mut camera.camera, dt);
        camera
            .uniform
            .update_view_proj(&camera.camera, &self.ctx.projection);
        self.ctx
            .queue
            .write_buffer(&camera.buffer, 0, bytemuck::cast_slice(&[camera.uniform]));
    }
}

pub struct App<State: 'static, Event: 'static> {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    proxy: winit::event_loop::EventLoopProxy<FlowEvent<State, Event>>,
    state: Option<AppState<State>>,
    // This will hold the fully initialized flows once they are ready.
    graphics_flows: Vec<Box<dyn GraphicsFlow<State, Event>>>,
    // Taken on the first `resumed`.
    constructors: Option<Vec<FlowConstructor<State, Event>>>,
    last_time: Instant,
    time_since_tick: Duration,
}

impl<State, Event> App<State, Event>
where
    State: 'static,
    Event: 'static,
{
    fn new(
        event_loop: &EventLoop<FlowEvent<State, Event>>,
        constructors: Vec<FlowConstructor<State, Event>>,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime: tokio::runtime::Runtime::new()?,
            proxy,
            state: None,
            graphics_flows: Vec::new(),
            constructors: Some(constructors),
            last_time: Instant::now(),
            time_since_tick: Duration::from_millis(0),
        })
    }
}

pub(crate) enum FlowEvent<State: 'static, Event: 'static> {
    #[allow(dead_code)]
    Initialized {
        state: AppState<State>,
        flows: Vec<Box<dyn GraphicsFlow<State, Event>>>,
    },
    Custom(Event),
}

impl<State, Event> Debug for FlowEvent<State, Event> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { state: _, flows } => {
                f.debug_struct("Initialized").field("flows", flows).finish()
            }
            Self::Custom(_) => f.write_str("Custom(E)"),
        }
    }
}

impl<State: 'static + Default, Event: 'static> App<State, Event> {
    fn init_flows(&mut self, app_state: &mut AppState<State>) {
        let size = app_state.ctx.window.inner_size();
        app_state.resize(size.width, size.height);
        self.graphics_flows.iter_mut().for_each(|flow| {
            let events = flow.on_init(&mut app_state.ctx, &mut app_state.state);
            handle_flow_output(
                #[cfg(not(target_arch = "wasm32"))]
                &self.async_runtime,
                self.proxy.clone(),
                events,
            );
        });
        app_state.ctx.window.request_redraw();
    }
}

impl<State: 'static + Default, Event: 'static> ApplicationHandler<FlowEvent<State, Event>>
    for App<State, Event>
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(constructors) = self.constructors.take() else {
            return;
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes().with_title("Door");

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("could not create a window: {e}");
                event_loop.exit();
                return;
            }
        };

        let init_future = async move {
            let app_state = AppState::new(window).await?;
            let flow_futures: Vec<_> = constructors
                .into_iter()
                // InitContext only clones the Arcs inside Device and Queue
                .map(|constructor| constructor((&app_state.ctx).into()))
                .collect();
            let flows: Vec<_> = futures::future::join_all(flow_futures).await;
            anyhow::Ok((app_state, flows))
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok((mut app_state, flows)) => {
                    log::info!("{} flow(s) initialised", flows.len());
                    self.graphics_flows = flows;
                    self.init_flows(&mut app_state);
                    self.state = Some(app_state);
                }
                Err(e) => {
                    log::error!("initialisation failed: {e:#}");
                    event_loop.exit();
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match init_future.await {
                    Ok((state, flows)) => {
                        if proxy
                            .send_event(FlowEvent::Initialized { state, flows })
                            .is_err()
                        {
                            log::error!("event loop closed before initialisation finished");
                        }
                    }
                    Err(e) => log::error!("initialisation failed: {e:#}"),
                }
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: FlowEvent<State, Event>) {
        match event {
            FlowEvent::Initialized { mut state, flows } => {
                // This is the message from the wasm `spawn_local`
                self.graphics_flows = flows;
                self.init_flows(&mut state);
                self.state = Some(state);
            }
            FlowEvent::Custom(custom_event) => {
                if let Some(state) = &mut self.state {
                    let result = self
                        .graphics_flows
                        .iter_mut()
                        .fold(Some(custom_event), |event, flow| {
                            flow.on_custom_events(&state.ctx, &mut state.state, event?)
                        });
                    if result.is_some() {
                        log::warn!("custom event was not consumed this cycle");
                    }
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let controller = &mut state.ctx.camera.controller;
            match state.ctx.mouse.pressed {
                MouseButtonState::Left => controller.handle_mouse(dx * DRAG_SPEED, dy * DRAG_SPEED),
                MouseButtonState::Right => controller.handle_pan(dx, dy),
                MouseButtonState::None => (),
            }
        }
        self.graphics_flows.iter_mut().for_each(|f| {
            let events = f.on_device_events(&state.ctx, &mut state.state, &event);
            handle_flow_output(
                #[cfg(not(target_arch = "wasm32"))]
                &self.async_runtime,
                self.proxy.clone(),
                events,
            );
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        state.ctx.camera.controller.handle_window_events(&event);
        if let WindowEvent::CursorMoved { position, .. } = event {
            state.ctx.mouse.coords = position;
        }

        self.graphics_flows.iter_mut().for_each(|f| {
            let events = f.on_window_events(&state.ctx, &mut state.state, &event);
            handle_flow_output(
                #[cfg(not(target_arch = "wasm32"))]
                &self.async_runtime,
                self.proxy.clone(),
                events,
            );
        });

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                state.ctx.mouse.pressed = match (button, button_state) {
                    (MouseButton::Left, ElementState::Pressed) => MouseButtonState::Left,
                    (MouseButton::Right, ElementState::Pressed) => MouseButtonState::Right,
                    (_, ElementState::Released) => MouseButtonState::None,
                    _ => state.ctx.mouse.pressed,
                };
            }
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                self.time_since_tick += dt;
                match state.render(&self.graphics_flows) {
                    Ok(_) => {
                        if self.time_since_tick
                            >= Duration::from_millis(state.ctx.tick_duration_millis)
                        {
                            self.graphics_flows.iter_mut().for_each(|f| {
                                let events = f.on_tick(&state.ctx, &mut state.state);
                                handle_flow_output(
                                    #[cfg(not(target_arch = "wasm32"))]
                                    &self.async_runtime,
                                    self.proxy.clone(),
                                    events,
                                );
                            });
                            self.time_since_tick = Duration::from_millis(0);
                        }
                        state.update_camera(dt);
                        self.graphics_flows.iter_mut().for_each(|f| {
                            let events = f.on_update(&state.ctx, &mut state.state, dt);
                            handle_flow_output(
                                #[cfg(not(target_arch = "wasm32"))]
                                &self.async_runtime,
                                self.proxy.clone(),
                                events,
                            );
                        });
                    }
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("unable to render: {e}");
                    }
                }
            }
            _ => {}
        }
    }
}

fn handle_flow_output<State, Event>(
    #[cfg(not(target_arch = "wasm32"))] async_runtime: &tokio::runtime::Runtime,
    proxy: winit::event_loop::EventLoopProxy<FlowEvent<State, Event>>,
    out: Out<Event>,
) {
    match out {
        // Send the events passed by the flow to winit
        Out::FutEvent(futures) => {
            let fut =
                async move { futures::future::join_all(futures.into_iter().map(Pin::from)).await };
            #[cfg(not(target_arch = "wasm32"))]
            {
                let resolved = async_runtime.block_on(fut);
                for event in resolved {
                    if let Err(err) = proxy.send_event(FlowEvent::Custom(event)) {
                        log::error!("event loop closed before all events were processed: {err}");
                        return;
                    }
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                wasm_bindgen_futures::spawn_local(async move {
                    let resolved = fut.await;
                    for event in resolved {
                        if proxy.send_event(FlowEvent::Custom(event)).is_err() {
                            log::error!("event loop closed before all events were processed");
                            return;
                        }
                    }
                });
            }
        }
        Out::Empty => (),
    }
}

pub fn run<State: 'static + Default, Event: 'static>(
    constructors: Vec<FlowConstructor<State, Event>>,
) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            eprintln!("Warning: could not initialize logger: {e}");
        };
    }
    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow::anyhow!("could not initialize logger: {e}"))?;
    }

    let event_loop: EventLoop<FlowEvent<State, Event>> = EventLoop::with_user_event().build()?;
    let mut app: App<State, Event> = App::new(&event_loop, constructors)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
