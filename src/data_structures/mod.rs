//! Engine data structures: meshes, generated geometry, instances and textures.
//!
//! - `model` contains mesh and material definitions, GPU resources for 3D models
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `geometry` generates box and sphere meshes
//! - `instance` holds per-instance transformation data
//! - `shape` is a generated mesh plus its instances, ready to render

pub mod geometry;
pub mod instance;
pub mod model;
pub mod shape;
pub mod texture;
