//! Scene settings.
//!
//! Every value has a default matching the reference scene; [`SceneConfig`] is
//! consumed once while the scene flow is constructed and initialised.

use crate::{door::DoorBuilder, pipelines::light::LightUniform};

#[derive(Clone, Debug, PartialEq)]
pub struct DoorConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub depth_center: f32,
    pub center_texture: String,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 3.0,
            depth: 0.3,
            depth_center: 0.1,
            center_texture: "wood1.jpg".to_string(),
        }
    }
}

impl DoorConfig {
    pub fn builder(&self) -> DoorBuilder {
        let mut builder = DoorBuilder::new(self.width, self.height, self.depth, self.depth_center);
        if let Some(texture) = builder.center_material.texture.as_mut() {
            *texture = crate::door::TileableTexture::new(self.center_texture.clone());
        }
        builder
    }
}

/// An integer range control whose value is divided by `divisor` before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    pub min: i32,
    pub max: i32,
    pub value: i32,
    /// Change per key press.
    pub step: i32,
    pub divisor: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            speed: 10.0,
            sensitivity: 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    pub point_position: [f32; 3],
    pub point_colour: u32,
    pub point_intensity: f32,
    pub directional_from: [f32; 3],
    pub directional_colour: u32,
    pub directional_intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            point_position: [0.0, 20.0, 0.0],
            point_colour: 0xffffff,
            point_intensity: 100.0,
            directional_from: [5.0, 4.0, 14.0],
            directional_colour: 0xffffff,
            directional_intensity: 1.0,
        }
    }
}

impl LightConfig {
    pub fn uniform(&self) -> LightUniform {
        LightUniform::new(
            self.point_position,
            hex_to_rgb(self.point_colour),
            self.point_intensity,
            self.directional_from,
            hex_to_rgb(self.directional_colour),
            self.directional_intensity,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub door: DoorConfig,
    pub width_slider: SliderConfig,
    pub height_slider: SliderConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub clear_colour: wgpu::Color,
    pub floor_texture: String,
    /// Drawn on the inside of a dome around the scene.
    pub background_texture: String,
    pub tick_duration_millis: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            door: DoorConfig::default(),
            width_slider: SliderConfig {
                min: 100,
                max: 500,
                value: 200,
                step: 10,
                divisor: 100.0,
            },
            height_slider: SliderConfig {
                min: 100,
                max: 500,
                value: 300,
                step: 10,
                divisor: 100.0,
            },
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            clear_colour: wgpu::Color {
                r: 0.05,
                g: 0.06,
                b: 0.08,
                a: 1.0,
            },
            floor_texture: "floor.png".to_string(),
            background_texture: "background.jpg".to_string(),
            tick_duration_millis: 500,
        }
    }
}

pub fn hex_to_rgb(colour: u32) -> [f32; 3] {
    [
        ((colour >> 16) & 0xff) as f32 / 255.0,
        ((colour >> 8) & 0xff) as f32 / 255.0,
        (colour & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_start_at_the_door_size() {
        let config = SceneConfig::default();
        let width = config.width_slider.value as f32 / config.width_slider.divisor;
        let height = config.height_slider.value as f32 / config.height_slider.divisor;
        assert_eq!(width, config.door.width);
        assert_eq!(height, config.door.height);
    }

    #[test]
    fn door_builder_uses_configured_texture() {
        let config = DoorConfig {
            center_texture: "oak.png".to_string(),
            ..Default::default()
        };
        let door = config.builder().build();
        let texture = door.center_material().texture.as_ref().unwrap();
        assert_eq!(texture.source(), "oak.png");
        assert_eq!(door.width(), 2.0);
    }

    #[test]
    fn default_scene_names_its_assets() {
        let config = SceneConfig::default();
        assert_eq!(config.floor_texture, "floor.png");
        assert_eq!(config.background_texture, "background.jpg");
        assert_eq!(config.door.center_texture, "wood1.jpg");
    }

    #[test]
    fn hex_colours_split_into_channels() {
        assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0x00ff00), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn default_lights_match_the_scene() {
        let light = LightConfig::default().uniform();
        assert_eq!(light.position, [0.0, 20.0, 0.0]);
        assert_eq!(light.intensity, 100.0);
        assert_eq!(light.directional_intensity, 1.0);
        assert!(light.direction[2] < 0.0);
    }
}
