//! door-scene
//!
//! A small wgpu scene built around a parametric framed door. The door is
//! five boxes (four rails and a recessed, textured center panel) that can be
//! resized live: rails keep their thickness, the center panel stretches and
//! its texture tiles instead of stretching. Runs natively and on the web.
//!
//! High-level modules
//! - `door`: the door model, its builder, the resize algorithm and its scene node
//! - `camera`: orbit camera, controller and uniforms for view/projection
//! - `config`: scene settings with their defaults
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: meshes, generated geometry, instances and textures
//! - `flow`: the application event loop and the flow lifecycle trait
//! - `pipelines`: the lit textured pipeline and the light uniform
//! - `resources`: helpers to load textures and create GPU resources
//! - `render`: render composition for efficient pipeline reuse
//! - `scene`: the door showcase scene
//! - `ui`: keyboard sliders driving the door's size
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod door;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod ui;

pub use door::{Door, DoorBuilder, node::DoorNode};
pub use winit::event::{DeviceEvent, WindowEvent};
