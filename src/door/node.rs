use crate::{
    context::{BufferWriter, Context, InitContext},
    data_structures::{
        geometry::Geometry,
        instance::Instance,
        model::{Material, MaterialUniform},
        shape::ShapeNode,
        texture::Texture,
    },
    door::{Door, MaterialSlot, Panel, PanelRole, SurfaceMaterial},
    render::Render,
    resources,
};

/// Scene node presenting a [`Door`].
///
/// Each panel gets its own box mesh, sized once from the panel's construction
/// geometry. The frame material is shared by the four rails. After a
/// [`DoorNode::resize`] only instance buffers and the center material's tiling
/// are rewritten.
#[derive(Debug)]
pub struct DoorNode {
    door: Door,
    root: Instance,
    top: ShapeNode,
    bottom: ShapeNode,
    left: ShapeNode,
    right: ShapeNode,
    center: ShapeNode,
    dirty: bool,
}

impl DoorNode {
    /// Uploads the door's meshes and loads the center texture.
    ///
    /// Panel ids are `id_base + i` in [`PanelRole::ALL`] order.
    pub async fn new(ctx: &InitContext, door: Door, root: Instance, id_base: u32) -> Self {
        let frame = mk_material(ctx, door.frame_material()).await;
        let center = mk_material(ctx, door.center_material()).await;

        let shape = |role: PanelRole| {
            let panel = door.panel(role);
            let material = match panel.material() {
                MaterialSlot::Frame => frame.clone(),
                MaterialSlot::Center => center.clone(),
            };
            let size = panel.geometry();
            ShapeNode::new(
                ctx,
                id_base + role as u32,
                role.name(),
                &Geometry::cuboid(size.width, size.height, size.depth),
                material,
                vec![&root * panel.transform()],
            )
        };

        let node = Self {
            top: shape(PanelRole::Top),
            bottom: shape(PanelRole::Bottom),
            left: shape(PanelRole::Left),
            right: shape(PanelRole::Right),
            center: shape(PanelRole::Center),
            root,
            dirty: true,
            door,
        };
        log::info!("door node ready with {} panels", PanelRole::ALL.len());
        node
    }

    /// The door model behind this node.
    pub fn door(&self) -> &Door {
        &self.door
    }

    /// Resizes the door. GPU buffers follow on the next [`BufferWriter::write_to_buffer`].
    pub fn resize(&mut self, width: f32, height: f32) {
        self.door.resize(width, height);
        self.dirty = true;
    }

    fn shape_mut(&mut self, role: PanelRole) -> &mut ShapeNode {
        match role {
            PanelRole::Top => &mut self.top,
            PanelRole::Bottom => &mut self.bottom,
            PanelRole::Left => &mut self.left,
            PanelRole::Right => &mut self.right,
            PanelRole::Center => &mut self.center,
        }
    }
}

impl BufferWriter for DoorNode {
    fn write_to_buffer(&mut self, ctx: &Context) {
        if !self.dirty {
            return;
        }
        for role in PanelRole::ALL {
            let world = world_transform(&self.root, self.door.panel(role));
            let shape = self.shape_mut(role);
            shape.instances = vec![world];
            shape.write_to_buffer(ctx);
        }
        let repeat = self.door.center_material().uv_repeat();
        if let Some(material) = self.center.material_mut() {
            material.set_uv_repeat(&ctx.queue, repeat);
        }
        self.dirty = false;
    }
}

impl<'a> From<&'a DoorNode> for Render<'a> {
    fn from(node: &'a DoorNode) -> Self {
        Render::Defaults(vec![
            node.top.instanced(),
            node.bottom.instanced(),
            node.left.instanced(),
            node.right.instanced(),
            node.center.instanced(),
        ])
    }
}

fn world_transform(root: &Instance, panel: &Panel) -> Instance {
    root * panel.transform()
}

async fn mk_material(ctx: &InitContext, surface: &SurfaceMaterial) -> Material {
    let mut uniform = MaterialUniform::from_hex(surface.colour, surface.roughness, surface.metalness);
    uniform.uv_repeat = surface.uv_repeat();
    let texture = match &surface.texture {
        Some(tileable) => {
            resources::load_texture_or_checker(tileable.source(), &ctx.device, &ctx.queue)
                .await
                .with_address_mode(&ctx.device, tileable.wrap().into())
        }
        None => Texture::create_solid([255; 4], &ctx.device, &ctx.queue, &surface.name),
    };
    Material::new(&ctx.device, &surface.name, texture, uniform, &ctx.material_layout)
}
