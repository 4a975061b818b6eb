//! Render composition and pipeline batching.
//!
//! Scene nodes describe what they want drawn with a [`Render`]. The engine
//! flattens every flow's `Render` into one batch per pipeline so that each
//! pipeline is bound once per frame.

use crate::data_structures::model::Model;

/// Data for instanced object rendering: a model, its instance buffer and an id.
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub model: &'a Model,
    pub amount: usize,
    pub id: u32,
}

/// Specifies how a scene object should be rendered.
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders a single opaque instanced object
/// - `Defaults(Vec<Instanced>)` renders a batch of opaque instanced objects
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    pub(crate) fn set_pipelines(self, basics: &mut Vec<Instanced<'a>>) {
        match self {
            Render::Default(instanced) => basics.push(instanced),
            Render::Defaults(mut vec) => basics.append(&mut vec),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(basics)),
            Render::None => (),
        }
    }

    /// Number of instanced draws this render expands to.
    #[cfg(test)]
    fn draw_count(&self) -> usize {
        match self {
            Render::None => 0,
            Render::Default(_) => 1,
            Render::Defaults(vec) => vec.len(),
            Render::Composed(renders) => renders.iter().map(Render::draw_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_expand_to_nothing() {
        let render: Render = Render::Composed(vec![
            Render::None,
            Render::Composed(vec![Render::None, Render::Defaults(Vec::new())]),
        ]);
        assert_eq!(render.draw_count(), 0);
        let mut basics = Vec::new();
        render.set_pipelines(&mut basics);
        assert!(basics.is_empty());
    }
}
