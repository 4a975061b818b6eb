//! Parametric framed door.
//!
//! A [`Door`] is four rails around a recessed, textured center panel. It is
//! built once by [`DoorBuilder`] and afterwards only resized with
//! [`Door::resize`], which rewrites per-panel transforms and the center
//! texture's tiling while the meshes stay untouched.
//!
//! ```text
//!  +------------------------+
//!  |          top           |
//!  +----+--------------+----+
//!  |    |              |    |
//!  |left|    center    |right
//!  |    |              |    |
//!  +----+--------------+----+
//!  |         bottom         |
//!  +------------------------+
//! ```
//!
//! The door model is plain data with no GPU state; [`node::DoorNode`] owns the
//! meshes and buffers that present it.

pub mod builder;
pub mod material;
pub mod node;
pub mod panel;
pub mod resize;

pub use builder::DoorBuilder;
pub use material::{SurfaceMaterial, TileableTexture, WrapMode};
pub use panel::{BoxSize, InitialSizes, MaterialSlot, Panel, PanelRole, PanelSize};

/// Share of the construction width taken by each rail.
pub const FRAME_RATIO: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Door {
    frame_width: f32,
    width: f32,
    height: f32,
    initial_sizes: InitialSizes,
    top: Panel,
    bottom: Panel,
    left: Panel,
    right: Panel,
    center: Panel,
    frame_material: SurfaceMaterial,
    center_material: SurfaceMaterial,
}

impl Door {
    /// Builds a door with the default materials.
    pub fn build(width: f32, height: f32, depth: f32, depth_center: f32) -> Self {
        DoorBuilder::new(width, height, depth, depth_center).build()
    }

    /// Rail thickness, fixed at construction.
    pub fn frame_width(&self) -> f32 {
        self.frame_width
    }

    /// Overall width from the last build or resize.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Overall height from the last build or resize.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn initial_sizes(&self) -> &InitialSizes {
        &self.initial_sizes
    }

    pub fn top(&self) -> &Panel {
        &self.top
    }

    pub fn bottom(&self) -> &Panel {
        &self.bottom
    }

    pub fn left(&self) -> &Panel {
        &self.left
    }

    pub fn right(&self) -> &Panel {
        &self.right
    }

    pub fn center(&self) -> &Panel {
        &self.center
    }

    pub fn panel(&self, role: PanelRole) -> &Panel {
        match role {
            PanelRole::Top => &self.top,
            PanelRole::Bottom => &self.bottom,
            PanelRole::Left => &self.left,
            PanelRole::Right => &self.right,
            PanelRole::Center => &self.center,
        }
    }

    /// All panels in [`PanelRole::ALL`] order.
    pub fn panels(&self) -> [&Panel; 5] {
        [&self.top, &self.bottom, &self.left, &self.right, &self.center]
    }

    pub fn frame_material(&self) -> &SurfaceMaterial {
        &self.frame_material
    }

    pub fn center_material(&self) -> &SurfaceMaterial {
        &self.center_material
    }

    pub fn material(&self, slot: MaterialSlot) -> &SurfaceMaterial {
        match slot {
            MaterialSlot::Frame => &self.frame_material,
            MaterialSlot::Center => &self.center_material,
        }
    }

    /// Size of the opening between the rails for the current overall size.
    pub fn central_size(&self) -> PanelSize {
        PanelSize {
            width: self.width - 2.0 * self.frame_width,
            height: self.height - 2.0 * self.frame_width,
        }
    }
}
