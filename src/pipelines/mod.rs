//! Render pipelines and the uniforms they bind.
//!
//! - `basic` is the lit, textured pipeline used for every mesh
//! - `light` holds the light uniform shared by all draws

pub mod basic;
pub mod light;
