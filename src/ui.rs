//! Keyboard-driven sliders for the door's overall size.
//!
//! Left/Right move the width slider, Up/Down the height slider. Every change
//! yields one [`DoorResize`] carrying both current values, so the door is
//! always resized with the other slider's current position.

use winit::keyboard::KeyCode;

use crate::config::SliderConfig;

/// A bounded integer range, read as `value / divisor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    min: i32,
    max: i32,
    value: i32,
    step: i32,
    divisor: f32,
}

impl Slider {
    pub fn new(min: i32, max: i32, value: i32, step: i32, divisor: f32) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
            step,
            divisor,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn scaled(&self) -> f32 {
        self.value as f32 / self.divisor
    }

    /// Sets the raw value, clamped to the range. Returns whether it changed.
    pub fn set(&mut self, value: i32) -> bool {
        let value = value.clamp(self.min, self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    pub fn increment(&mut self) -> bool {
        self.set(self.value.saturating_add(self.step))
    }

    pub fn decrement(&mut self) -> bool {
        self.set(self.value.saturating_sub(self.step))
    }
}

impl From<SliderConfig> for Slider {
    fn from(config: SliderConfig) -> Self {
        Self::new(config.min, config.max, config.value, config.step, config.divisor)
    }
}

/// Overall door size requested by the controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorResize {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorControls {
    pub width: Slider,
    pub height: Slider,
}

impl DoorControls {
    pub fn new(width: Slider, height: Slider) -> Self {
        Self { width, height }
    }

    pub fn current(&self) -> DoorResize {
        DoorResize {
            width: self.width.scaled(),
            height: self.height.scaled(),
        }
    }

    /// Applies a key press. Keys that are not bound, or that would push a
    /// slider past its bound, produce no event.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<DoorResize> {
        let changed = match key {
            KeyCode::ArrowRight => self.width.increment(),
            KeyCode::ArrowLeft => self.width.decrement(),
            KeyCode::ArrowUp => self.height.increment(),
            KeyCode::ArrowDown => self.height.decrement(),
            _ => false,
        };
        changed.then(|| self.current())
    }

    pub fn title(&self) -> String {
        let DoorResize { width, height } = self.current();
        format!("Door {width:.2} x {height:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    fn controls() -> DoorControls {
        let config = SceneConfig::default();
        DoorControls::new(config.width_slider.into(), config.height_slider.into())
    }

    #[test]
    fn defaults_read_as_two_by_three() {
        assert_eq!(
            controls().current(),
            DoorResize {
                width: 2.0,
                height: 3.0
            }
        );
    }

    #[test]
    fn width_keys_keep_the_current_height() {
        let mut controls = controls();
        let event = controls.handle_key(KeyCode::ArrowRight).unwrap();
        assert_eq!(event.width, 2.1);
        assert_eq!(event.height, 3.0);
        let event = controls.handle_key(KeyCode::ArrowUp).unwrap();
        assert_eq!(event.width, 2.1);
        assert_eq!(event.height, 3.1);
    }

    #[test]
    fn sliders_stop_at_their_bounds() {
        let mut controls = controls();
        for _ in 0..100 {
            controls.handle_key(KeyCode::ArrowLeft);
        }
        assert_eq!(controls.width.value(), 100);
        assert_eq!(controls.handle_key(KeyCode::ArrowLeft), None);
        for _ in 0..100 {
            controls.handle_key(KeyCode::ArrowUp);
        }
        assert_eq!(controls.height.value(), 500);
        assert_eq!(controls.current().height, 5.0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut controls = controls();
        assert_eq!(controls.handle_key(KeyCode::KeyW), None);
        assert_eq!(controls.current().width, 2.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut slider = Slider::new(100, 500, 900, 10, 100.0);
        assert_eq!(slider.value(), 500);
        assert!(slider.set(50));
        assert_eq!(slider.value(), 100);
        assert!(!slider.set(100));
    }

    #[test]
    fn title_shows_both_dimensions() {
        assert_eq!(controls().title(), "Door 2.00 x 3.00");
    }
}
