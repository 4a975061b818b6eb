use cgmath::Vector3;

use crate::data_structures::instance::Instance;

/// The five rigid parts of a framed door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelRole {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl PanelRole {
    pub const ALL: [PanelRole; 5] = [
        PanelRole::Top,
        PanelRole::Bottom,
        PanelRole::Left,
        PanelRole::Right,
        PanelRole::Center,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelRole::Top => "top",
            PanelRole::Bottom => "bottom",
            PanelRole::Left => "left",
            PanelRole::Right => "right",
            PanelRole::Center => "center",
        }
    }
}

/// Width and height of a panel in the door plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

/// Full box dimensions a panel's mesh is generated with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BoxSize {
    pub fn face(&self) -> PanelSize {
        PanelSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Which of the door's two shared materials a panel is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialSlot {
    /// Opaque, untextured rails.
    Frame,
    /// Tileable texture on the recessed fill.
    Center,
}

/// Sizes recorded at construction, one field per role.
///
/// Every scale ratio is `new / initial` against this record; it is never
/// written after the door is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialSizes {
    pub top: PanelSize,
    pub bottom: PanelSize,
    pub left: PanelSize,
    pub right: PanelSize,
    pub center: PanelSize,
}

impl InitialSizes {
    pub fn get(&self, role: PanelRole) -> PanelSize {
        match role {
            PanelRole::Top => self.top,
            PanelRole::Bottom => self.bottom,
            PanelRole::Left => self.left,
            PanelRole::Right => self.right,
            PanelRole::Center => self.center,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    role: PanelRole,
    geometry: BoxSize,
    material: MaterialSlot,
    pub(crate) transform: Instance,
}

impl Panel {
    pub(crate) fn new(
        role: PanelRole,
        geometry: BoxSize,
        material: MaterialSlot,
        position: Vector3<f32>,
    ) -> Self {
        Self {
            role,
            geometry,
            material,
            transform: Instance::from(position),
        }
    }

    pub fn role(&self) -> PanelRole {
        self.role
    }

    /// The box the mesh was generated from. Resizing never touches it.
    pub fn geometry(&self) -> BoxSize {
        self.geometry
    }

    pub fn material(&self) -> MaterialSlot {
        self.material
    }

    pub fn transform(&self) -> &Instance {
        &self.transform
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.transform.scale
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    /// Rendered size in the door plane: geometry stretched by the current scale.
    pub fn size(&self) -> PanelSize {
        PanelSize {
            width: self.geometry.width * self.transform.scale.x,
            height: self.geometry.height * self.transform.scale.y,
        }
    }
}
