//! Loading image assets and creating the GPU resources built from them.

pub mod texture;

pub use texture::{load_binary, load_texture, load_texture_or_checker, material_layout};
