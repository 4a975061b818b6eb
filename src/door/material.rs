use cgmath::Vector2;

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

impl From<WrapMode> for wgpu::AddressMode {
    fn from(wrap: WrapMode) -> Self {
        match wrap {
            WrapMode::Repeat => wgpu::AddressMode::Repeat,
            WrapMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
        }
    }
}

/// An image mapped onto a surface with per-axis tiling.
#[derive(Clone, Debug, PartialEq)]
pub struct TileableTexture {
    source: String,
    wrap: WrapMode,
    repeat: Vector2<f32>,
}

impl TileableTexture {
    /// Wraps with [`WrapMode::Repeat`] on both axes and starts with a repeat of one.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            wrap: WrapMode::Repeat,
            repeat: Vector2::new(1.0, 1.0),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    pub fn repeat(&self) -> Vector2<f32> {
        self.repeat
    }

    pub fn set_repeat(&mut self, x: f32, y: f32) {
        self.repeat = Vector2::new(x, y);
    }
}

/// Description of one of the door's shared materials.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceMaterial {
    pub name: String,
    /// `0xRRGGBB`
    pub colour: u32,
    pub roughness: f32,
    pub metalness: f32,
    pub texture: Option<TileableTexture>,
}

impl SurfaceMaterial {
    /// The sienna rails.
    pub fn frame() -> Self {
        Self {
            name: "door frame".to_string(),
            colour: 0xa0522d,
            roughness: 0.3,
            metalness: 0.5,
            texture: None,
        }
    }

    /// The wooden fill, tinted white so the texture shows as is.
    pub fn center(texture: impl Into<String>) -> Self {
        Self {
            name: "door center".to_string(),
            colour: 0xffffff,
            roughness: 0.3,
            metalness: 0.3,
            texture: Some(TileableTexture::new(texture)),
        }
    }

    /// Current tiling, `(1, 1)` for untextured materials.
    pub fn uv_repeat(&self) -> [f32; 2] {
        self.texture
            .as_ref()
            .map(|texture| texture.repeat().into())
            .unwrap_or([1.0, 1.0])
    }
}
