use crate::door::Door;

impl Door {
    /// Fits the door to a new overall size.
    ///
    /// Rails keep their thickness and only stretch along their length, the
    /// center panel stretches on both axes and its texture repeat follows the
    /// same ratios so the image tiles instead of stretching. Every ratio is
    /// taken against the initial sizes, so repeated calls with the same
    /// arguments land in the same state.
    ///
    /// Nothing is clamped: once the overall size drops to two frame widths
    /// or below, the center panel collapses to a zero or negative scale.
    pub fn resize(&mut self, new_width: f32, new_height: f32) {
        let initial = self.initial_sizes;
        let frame_width = initial.top.height;
        let central_width = new_width - 2.0 * frame_width;
        let central_height = new_height - 2.0 * frame_width;

        if central_width <= 0.0 || central_height <= 0.0 {
            log::warn!(
                "door {new_width} x {new_height} leaves no room inside a {frame_width} frame, the center panel degenerates"
            );
        }

        let rail_y = new_height / 2.0 - frame_width / 2.0;
        self.top.transform.scale.x = new_width / initial.top.width;
        self.bottom.transform.scale.x = new_width / initial.bottom.width;
        self.top.transform.position.y = rail_y;
        self.bottom.transform.position.y = -rail_y;

        let stile_x = new_width / 2.0 - frame_width / 2.0;
        self.left.transform.scale.y = central_height / initial.left.height;
        self.right.transform.scale.y = central_height / initial.right.height;
        self.left.transform.position.x = -stile_x;
        self.right.transform.position.x = stile_x;

        let repeat_x = central_width / initial.center.width;
        let repeat_y = central_height / initial.center.height;
        self.center.transform.scale = cgmath::Vector3::new(repeat_x, repeat_y, 1.0);
        if let Some(texture) = self.center_material.texture.as_mut() {
            texture.set_repeat(repeat_x, repeat_y);
        }

        self.width = new_width;
        self.height = new_height;

        log::debug!("resized door to {new_width} x {new_height}, center repeat ({repeat_x}, {repeat_y})");
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;

    use crate::door::{Door, PanelRole};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn reference_door() -> Door {
        Door::build(2.0, 3.0, 0.3, 0.1)
    }

    #[test]
    fn resizing_to_the_build_size_is_a_no_op() {
        let mut door = reference_door();
        door.resize(2.0, 3.0);
        for panel in door.panels() {
            let s = panel.scale();
            assert!(close(s.x, 1.0) && close(s.y, 1.0) && close(s.z, 1.0), "{:?}", panel.role());
        }
        assert_eq!(door, {
            let mut fresh = reference_door();
            fresh.resize(2.0, 3.0);
            fresh
        });
    }

    #[test]
    fn doubling_the_width_stretches_rails_only_horizontally() {
        let mut door = reference_door();
        door.resize(4.0, 3.0);
        assert!(close(door.top().scale().x, 2.0));
        assert!(close(door.bottom().scale().x, 2.0));
        assert!(close(door.top().scale().y, 1.0));
        assert!(close(door.left().scale().y, 1.0));
        assert!(close(door.right().scale().y, 1.0));
        assert!(close(door.left().scale().x, 1.0));
        assert!(close(door.center().scale().x, (4.0 - 0.4) / 1.6));
        assert!(close(door.center().scale().y, 1.0));
    }

    #[test]
    fn stiles_follow_the_new_width() {
        let mut door = reference_door();
        door.resize(4.0, 3.0);
        assert!(close(door.left().position().x, -1.9));
        assert!(close(door.right().position().x, 1.9));
    }

    #[test]
    fn rails_follow_the_new_height() {
        let mut door = reference_door();
        door.resize(2.0, 5.0);
        assert!(close(door.top().position().y, 2.4));
        assert!(close(door.bottom().position().y, -2.4));
        assert!(close(door.left().scale().y, 4.6 / 2.6));
        assert!(close(door.center().scale().y, 4.6 / 2.6));
    }

    #[test]
    fn frame_width_survives_resizes() {
        let mut door = reference_door();
        for (w, h) in [(4.0, 3.0), (1.0, 1.0), (5.0, 5.0), (0.1, 0.1)] {
            door.resize(w, h);
            assert!(close(door.frame_width(), 0.2));
            assert!(close(door.top().size().height, 0.2));
            assert!(close(door.left().size().width, 0.2));
        }
    }

    #[test]
    fn ratios_are_taken_against_the_initial_size() {
        let mut door = reference_door();
        door.resize(3.0, 4.0);
        door.resize(4.0, 3.0);
        let mut direct = reference_door();
        direct.resize(4.0, 3.0);
        assert_eq!(door, direct);
    }

    #[test]
    fn texture_repeat_matches_center_scale() {
        let mut door = reference_door();
        door.resize(3.3, 4.1);
        let repeat = door.center_material().texture.as_ref().unwrap().repeat();
        let scale = door.center().scale();
        assert!(close(repeat.x, scale.x));
        assert!(close(repeat.y, scale.y));
        assert!(close(repeat.x, (3.3 - 0.4) / 1.6));
        assert!(close(repeat.y, (4.1 - 0.4) / 2.6));
    }

    #[test]
    fn rendered_sizes_match_the_target() {
        let mut door = reference_door();
        door.resize(3.0, 4.5);
        assert!(close(door.top().size().width, 3.0));
        assert!(close(door.left().size().height, 4.1));
        let center = door.center().size();
        assert!(close(center.width, 2.6));
        assert!(close(center.height, 4.1));
        assert!(close(door.central_size().width, center.width));
        assert!(close(door.central_size().height, center.height));
    }

    #[test]
    fn too_narrow_collapses_the_center() {
        let mut door = reference_door();
        door.resize(0.4, 3.0);
        assert!(door.center().scale().x.abs() < 1e-6);
        door.resize(0.3, 3.0);
        assert!(door.center().scale().x < 0.0);
        assert!(door.left().position().x > -0.1);
    }

    #[test]
    fn geometry_is_never_touched() {
        let mut door = reference_door();
        let before: Vec<_> = PanelRole::ALL
            .iter()
            .map(|&role| door.panel(role).geometry())
            .collect();
        door.resize(4.5, 1.2);
        door.resize(0.2, 0.2);
        let after: Vec<_> = PanelRole::ALL
            .iter()
            .map(|&role| door.panel(role).geometry())
            .collect();
        assert_eq!(before, after);
        assert_eq!(door.center().scale().z, 1.0);
        assert_eq!(door.top().position().z, 0.0);
        assert_eq!(door.center().position(), Vector3::new(0.0, 0.0, 0.0));
    }
}
