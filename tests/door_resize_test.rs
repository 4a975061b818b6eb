use door_scene::door::{Door, DoorBuilder, PanelRole, SurfaceMaterial};

use crate::common::test_utils::{
    assert_close, assert_size, close, reference_door, resize_targets,
};

mod common;

#[test]
fn frame_width_is_fixed_for_the_door_lifetime() {
    let mut door = reference_door();
    let frame_width = door.frame_width();
    assert_close(frame_width, 0.2);
    for (w, h) in resize_targets() {
        door.resize(w, h);
        assert_eq!(door.frame_width(), frame_width);
        assert_close(door.top().size().height, frame_width);
        assert_close(door.bottom().size().height, frame_width);
        assert_close(door.left().size().width, frame_width);
        assert_close(door.right().size().width, frame_width);
    }
}

#[test]
fn resize_is_idempotent() {
    for (w, h) in resize_targets() {
        let mut once = reference_door();
        once.resize(w, h);
        let mut twice = once.clone();
        twice.resize(w, h);
        assert_eq!(once, twice, "resize({w}, {h})");
    }
}

#[test]
fn resize_does_not_depend_on_history() {
    for (w, h) in resize_targets() {
        let mut direct = reference_door();
        direct.resize(w, h);
        let mut wandering = reference_door();
        wandering.resize(4.1, 1.3);
        wandering.resize(1.1, 4.9);
        wandering.resize(w, h);
        assert_eq!(direct, wandering, "resize({w}, {h})");
    }
}

#[test]
fn rails_sit_at_the_top_and_bottom_edges() {
    let mut door = reference_door();
    for (w, h) in resize_targets() {
        door.resize(w, h);
        let fw = door.frame_width();
        assert_close(door.top().position().y, h / 2.0 - fw / 2.0);
        assert_close(door.bottom().position().y, -(h / 2.0 - fw / 2.0));
        assert_close(door.top().size().width, w);
    }
}

#[test]
fn stiles_sit_at_the_side_edges() {
    let mut door = reference_door();
    for (w, h) in resize_targets() {
        door.resize(w, h);
        let fw = door.frame_width();
        assert_close(door.left().position().x, -(w / 2.0 - fw / 2.0));
        assert_close(door.right().position().x, w / 2.0 - fw / 2.0);
        assert_close(door.left().size().height, h - 2.0 * fw);
    }
}

#[test]
fn texture_repeat_follows_the_center_panel() {
    let mut door = reference_door();
    let initial = door.initial_sizes().center;
    for (w, h) in resize_targets() {
        door.resize(w, h);
        let fw = door.frame_width();
        let expected = [(w - 2.0 * fw) / initial.width, (h - 2.0 * fw) / initial.height];
        let repeat = door.center_material().uv_repeat();
        assert_close(repeat[0], expected[0]);
        assert_close(repeat[1], expected[1]);
        assert_size(door.center().size(), w - 2.0 * fw, h - 2.0 * fw);
    }
}

#[test]
fn scenario_resize_to_build_size_keeps_unit_scales() {
    let mut door = reference_door();
    door.resize(2.0, 3.0);
    for role in PanelRole::ALL {
        let scale = door.panel(role).scale();
        assert_close(scale.x, 1.0);
        assert_close(scale.y, 1.0);
        assert_close(scale.z, 1.0);
    }
}

#[test]
fn scenario_doubling_the_width() {
    let mut door = reference_door();
    door.resize(4.0, 3.0);
    assert_close(door.top().scale().x, 2.0);
    assert_close(door.bottom().scale().x, 2.0);
    assert_close(door.left().scale().y, 1.0);
    assert_close(door.right().scale().y, 1.0);
    assert_close(door.center().scale().x, (4.0 - 0.4) / 1.6);
}

#[test]
fn scenario_narrower_than_the_frame_collapses_the_center() {
    let mut door = reference_door();
    for w in [0.4, 0.3, 0.1, 0.0, -1.0] {
        door.resize(w, 3.0);
        assert!(door.center().scale().x <= 1e-6, "width {w}");
    }
}

#[test]
fn frame_material_has_no_tiling() {
    let mut door = reference_door();
    door.resize(4.5, 1.5);
    assert_eq!(door.frame_material().uv_repeat(), [1.0, 1.0]);
}

#[test]
fn untextured_center_resizes_without_tiling() {
    let plain = SurfaceMaterial {
        texture: None,
        ..SurfaceMaterial::center("unused.jpg")
    };
    let mut door = DoorBuilder::new(2.0, 3.0, 0.3, 0.1)
        .center_material(plain)
        .build();
    door.resize(3.0, 3.0);
    assert!(close(door.center().scale().x, 2.6 / 1.6));
    assert_eq!(door.center_material().uv_repeat(), [1.0, 1.0]);
}

#[test]
fn other_construction_sizes_scale_from_their_own_initial_sizes() {
    let mut door = Door::build(1.0, 2.0, 0.2, 0.05);
    assert_close(door.frame_width(), 0.1);
    door.resize(2.0, 2.0);
    assert_close(door.top().scale().x, 2.0);
    assert_close(door.center().scale().x, (2.0 - 0.2) / 0.8);
    assert_close(door.center().scale().y, 1.0);
}
