#![allow(dead_code)]

use door_scene::door::{Door, PanelSize};

pub const EPSILON: f32 = 1e-4;

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        close(actual, expected),
        "expected {expected}, got {actual} (tolerance {EPSILON})"
    );
}

#[track_caller]
pub fn assert_size(actual: PanelSize, width: f32, height: f32) {
    assert_close(actual.width, width);
    assert_close(actual.height, height);
}

/// The door the scene starts with: 2 x 3, 0.3 deep, 0.1 deep center panel.
pub fn reference_door() -> Door {
    Door::build(2.0, 3.0, 0.3, 0.1)
}

/// Target sizes covering shrinking, growing and both axes independently.
pub fn resize_targets() -> Vec<(f32, f32)> {
    let mut targets = Vec::new();
    for w in [1.0, 1.5, 2.0, 2.7, 3.3, 5.0] {
        for h in [1.0, 2.2, 3.0, 4.4, 5.0] {
            targets.push((w, h));
        }
    }
    targets
}
