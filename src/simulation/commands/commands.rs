//! Host commands: scene switch, resize, pointer events, config reload
//!
//! Everything here runs synchronously between ticks. A resize or config
//! reload is fully applied before the next tick reads any state.

use crate::domain::config::EngineConfig;
use crate::scenes::{Scene, SceneKind};

use super::EngineCore;

pub fn set_scene(core: &mut EngineCore, kind: SceneKind) {
    if core.scene.kind() == kind {
        return;
    }
    core.scene = Scene::create(
        kind,
        core.width,
        core.height,
        &core.config,
        &mut core.rng_state,
    );
}

pub fn resize(core: &mut EngineCore, width: f32, height: f32) {
    if !(width > 0.0) || !(height > 0.0) {
        return;
    }
    core.width = width;
    core.height = height;
    core.scene
        .resize(width, height, &core.config, &mut core.rng_state);
}

pub fn pointer_moved(core: &mut EngineCore, x: f32, y: f32) {
    core.pointer.x = x;
    core.pointer.y = y;
    core.scene.pointer_moved(x, y, &core.config);
}

pub fn set_pointer_down(core: &mut EngineCore, down: bool) {
    core.pointer.down = down;
}

/// Parse, validate, swap in the new config, then restart the active scene
/// so per-scene populations and sizes reflect it. On error the old config
/// and scene are untouched.
pub fn load_config_json(core: &mut EngineCore, json: &str) -> Result<(), String> {
    let config = EngineConfig::from_json(json)?;
    core.config = config;
    core.scene = Scene::create(
        core.scene.kind(),
        core.width,
        core.height,
        &core.config,
        &mut core.rng_state,
    );
    Ok(())
}
