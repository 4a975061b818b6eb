use cgmath::Vector3;

use crate::door::{
    Door, FRAME_RATIO,
    material::SurfaceMaterial,
    panel::{BoxSize, InitialSizes, MaterialSlot, Panel, PanelRole},
};

/// Construction parameters for a [`Door`].
///
/// `depth` is the thickness of the rails, `depth_center` the thickness of the
/// center panel, which should be the smaller of the two so the panel sits
/// recessed inside the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorBuilder {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub depth_center: f32,
    pub frame_material: SurfaceMaterial,
    pub center_material: SurfaceMaterial,
}

impl Default for DoorBuilder {
    fn default() -> Self {
        Self::new(2.0, 3.0, 0.3, 0.1)
    }
}

impl DoorBuilder {
    pub fn new(width: f32, height: f32, depth: f32, depth_center: f32) -> Self {
        Self {
            width,
            height,
            depth,
            depth_center,
            frame_material: SurfaceMaterial::frame(),
            center_material: SurfaceMaterial::center("wood1.jpg"),
        }
    }

    pub fn frame_material(mut self, material: SurfaceMaterial) -> Self {
        self.frame_material = material;
        self
    }

    pub fn center_material(mut self, material: SurfaceMaterial) -> Self {
        self.center_material = material;
        self
    }

    /// Lays out the five panels and records their initial sizes.
    ///
    /// Inputs are taken as given; non-positive values produce degenerate boxes.
    pub fn build(self) -> Door {
        let Self {
            width,
            height,
            depth,
            depth_center,
            frame_material,
            center_material,
        } = self;

        if width <= 0.0 || height <= 0.0 || depth <= 0.0 || depth_center <= 0.0 {
            log::warn!(
                "building a door from non-positive dimensions {width} x {height} x {depth} (center {depth_center})"
            );
        }
        if depth_center >= depth {
            log::warn!(
                "center depth {depth_center} is not smaller than frame depth {depth}, the panel will not sit recessed"
            );
        }

        let frame_width = width * FRAME_RATIO;
        let central_width = width - 2.0 * frame_width;
        let central_height = height - 2.0 * frame_width;

        let rail_y = height / 2.0 - frame_width / 2.0;
        let stile_x = width / 2.0 - frame_width / 2.0;

        let horizontal = BoxSize {
            width,
            height: frame_width,
            depth,
        };
        let vertical = BoxSize {
            width: frame_width,
            height: central_height,
            depth,
        };
        let fill = BoxSize {
            width: central_width,
            height: central_height,
            depth: depth_center,
        };

        let top = Panel::new(
            PanelRole::Top,
            horizontal,
            MaterialSlot::Frame,
            Vector3::new(0.0, rail_y, 0.0),
        );
        let bottom = Panel::new(
            PanelRole::Bottom,
            horizontal,
            MaterialSlot::Frame,
            Vector3::new(0.0, -rail_y, 0.0),
        );
        let left = Panel::new(
            PanelRole::Left,
            vertical,
            MaterialSlot::Frame,
            Vector3::new(-stile_x, 0.0, 0.0),
        );
        let right = Panel::new(
            PanelRole::Right,
            vertical,
            MaterialSlot::Frame,
            Vector3::new(stile_x, 0.0, 0.0),
        );
        let center = Panel::new(
            PanelRole::Center,
            fill,
            MaterialSlot::Center,
            Vector3::new(0.0, 0.0, 0.0),
        );

        let initial_sizes = InitialSizes {
            top: top.geometry().face(),
            bottom: bottom.geometry().face(),
            left: left.geometry().face(),
            right: right.geometry().face(),
            center: center.geometry().face(),
        };

        log::debug!(
            "built door {width} x {height}, frame {frame_width}, opening {central_width} x {central_height}"
        );

        Door {
            frame_width,
            width,
            height,
            initial_sizes,
            top,
            bottom,
            left,
            right,
            center,
            frame_material,
            center_material,
        }
    }
}
