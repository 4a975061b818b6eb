use door_scene::{
    config::SceneConfig,
    ui::{DoorControls, DoorResize},
};
use winit::keyboard::KeyCode;

use crate::common::test_utils::{assert_close, reference_door};

mod common;

fn controls() -> DoorControls {
    let config = SceneConfig::default();
    DoorControls::new(config.width_slider.into(), config.height_slider.into())
}

#[test]
fn every_key_press_resizes_with_both_slider_values() {
    let mut controls = controls();
    let mut door = reference_door();
    let keys = [
        KeyCode::ArrowRight,
        KeyCode::ArrowRight,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowUp,
        KeyCode::ArrowUp,
    ];
    for key in keys {
        let DoorResize { width, height } = controls.handle_key(key).unwrap();
        door.resize(width, height);
        assert_close(door.top().size().width, controls.width.scaled());
        assert_close(door.top().position().y * 2.0 + door.frame_width(), controls.height.scaled());
    }
    assert_eq!(controls.width.value(), 210);
    assert_eq!(controls.height.value(), 310);
}

#[test]
fn slider_range_keeps_the_center_panel_open() {
    let mut controls = controls();
    let mut door = reference_door();
    for _ in 0..50 {
        if let Some(DoorResize { width, height }) = controls.handle_key(KeyCode::ArrowLeft) {
            door.resize(width, height);
        }
    }
    assert_eq!(controls.current().width, 1.0);
    assert!(door.center().scale().x > 0.0);
}
