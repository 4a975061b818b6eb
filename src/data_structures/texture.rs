//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around WGPU GPU texture resources,
//! and helper methods for creating depth textures, solid fills, and textures
//! from image data. Colour textures are sampled with repeat addressing on both
//! axes so that a material's UV repeat tiles the image instead of stretching it.

use anyhow::*;
use image::{GenericImageView, ImageFormat, load_from_memory_with_format};

/// A GPU texture with a view and a sampler.
#[derive(Clone, Debug)]
pub struct Texture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Standard depth buffer texture format (32-bit float).
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// # Arguments
    ///
    /// * `size` is [width, height] of the texture in pixels
    /// * `label` is used as a debug label for the GPU resource
    pub fn create_depth_texture(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };
        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            lod_min_clamp: 0.0,
            lod_max_clamp: 100.0,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Create a single-colour texture.
    ///
    /// Untextured materials (the door frame, the primitives) bind a white fill so
    /// that every material goes through the same pipeline and the colour comes
    /// from the material uniform alone.
    pub fn create_solid(
        rgba: [u8; 4],
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
    ) -> Texture {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba(rgba),
        ));
        Self::upload(device, queue, &img, Some(label))
    }

    /// Load a texture from raw byte data (image file contents).
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG, etc.)
    /// * `label` is used as a debug name for the GPU resource
    /// * `format`  is an optional file extension hint (e.g., "png"). If None, auto-detect.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        format: Option<&str>,
    ) -> Result<Self> {
        let img = match format.and_then(ImageFormat::from_extension) {
            None => image::load_from_memory(bytes)
                .with_context(|| format!("could not decode texture {label}"))?,
            Some(fmt) => load_from_memory_with_format(bytes, fmt)
                .with_context(|| format!("could not decode texture {label} as {fmt:?}"))?,
        };
        Ok(Self::from_image(device, queue, &img, Some(label)))
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: Option<&str>,
    ) -> Self {
        Self::upload(device, queue, img, label)
    }

    /// Swaps the sampler for one using `address_mode` on every axis.
    pub fn with_address_mode(mut self, device: &wgpu::Device, address_mode: wgpu::AddressMode) -> Self {
        self.sampler = create_sampler(device, address_mode);
        self
    }

    fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: Option<&str>,
    ) -> Self {
        let dimensions = img.dimensions();
        let rgba = img.to_rgba8();

        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_repeat_sampler(device);

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Linear sampler that wraps with repeat addressing on every axis.
pub fn create_repeat_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    create_sampler(device, wgpu::AddressMode::Repeat)
}

pub fn create_sampler(device: &wgpu::Device, address_mode: wgpu::AddressMode) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: address_mode,
        address_mode_v: address_mode,
        address_mode_w: address_mode,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

/// A two-tone checkerboard used whenever an image asset cannot be loaded.
///
/// `cells` is the number of squares along each edge.
pub fn checker_image(size: u32, cells: u32, light: [u8; 3], dark: [u8; 3]) -> image::DynamicImage {
    let cell = (size / cells.max(1)).max(1);
    let img = image::RgbImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            image::Rgb(light)
        } else {
            image::Rgb(dark)
        }
    });
    image::DynamicImage::ImageRgb8(img)
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;

    use super::*;

    #[test]
    fn checker_alternates_cells() {
        let img = checker_image(8, 2, [255, 255, 255], [0, 0, 0]);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(0, 0), image::Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(4, 0), image::Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(4, 4), image::Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn checker_survives_more_cells_than_pixels() {
        let img = checker_image(2, 16, [10, 10, 10], [20, 20, 20]);
        assert_eq!(img.get_pixel(0, 0), image::Rgba([10, 10, 10, 255]));
        assert_eq!(img.get_pixel(1, 0), image::Rgba([20, 20, 20, 255]));
    }
}
