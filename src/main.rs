use door_scene::{config::SceneConfig, scene::run_scene};

fn main() -> anyhow::Result<()> {
    run_scene(SceneConfig::default())
}
