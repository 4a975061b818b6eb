use crate::data_structures::texture;

/// Environment variable that overrides the native asset directory.
pub const ASSETS_ENV: &str = "DOOR_SCENE_ASSETS";

pub fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
        label: Some("material_bind_group_layout"),
    })
}

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no browser window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin is not readable"))?;
    let base = reqwest::Url::parse(&format!("{origin}/assets/"))?;
    Ok(base.join(file_name)?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn asset_path(file_name: &str) -> std::path::PathBuf {
    let root = std::env::var_os(ASSETS_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::Path::new("./").join("assets"));
    root.join(file_name)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.error_for_status()?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        use anyhow::Context;
        let path = asset_path(file_name);
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?
    };

    Ok(data)
}

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    format: Option<&str>,
) -> anyhow::Result<texture::Texture> {
    let data = load_binary(file_name).await?;
    texture::Texture::from_bytes(device, queue, &data, file_name, format)
}

/// Loads `file_name`, or a checkerboard when the asset is missing or unreadable.
pub async fn load_texture_or_checker(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> texture::Texture {
    match load_texture(file_name, device, queue, None).await {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("falling back to a checker texture for {file_name}: {e:#}");
            let checker = texture::checker_image(256, 8, [200, 200, 200], [90, 90, 90]);
            texture::Texture::from_image(device, queue, &checker, Some(file_name))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn asset_path_ends_with_file_name() {
        assert!(asset_path("wood1.jpg").ends_with("wood1.jpg"));
    }
}
