//! WASM facade - the only surface the host sees
//!
//! Thin delegation over `EngineCore`. JS-side errors are strings wrapped
//! in `JsValue`; everything else crosses the boundary as numbers or raw
//! pointers into the sprite transfer buffers.

use wasm_bindgen::prelude::*;

use crate::scenes::SceneKind;

use super::{EngineCore, PerfStats};

/// Byte-level description of the sprite transfer buffers, handed to the
/// host once so the JS reader and the Rust layout cannot drift apart.
#[wasm_bindgen]
pub struct AbiLayout {
    pub f32_size: u32,
    pub u32_size: u32,
    pub shape_size: u32,
}

impl AbiLayout {
    fn describe() -> Self {
        Self {
            f32_size: core::mem::size_of::<f32>() as u32,
            u32_size: core::mem::size_of::<u32>() as u32,
            shape_size: core::mem::size_of::<u8>() as u32,
        }
    }
}

#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine running the given scene at the given canvas size.
    #[wasm_bindgen(constructor)]
    pub fn new(scene_id: u8, width: f32, height: f32) -> Result<Engine, JsValue> {
        let kind = SceneKind::from_id(scene_id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown scene id: {scene_id}")))?;
        if !(width > 0.0) || !(height > 0.0) {
            return Err(JsValue::from_str("canvas size must be positive"));
        }
        Ok(Engine {
            core: EngineCore::new(kind, width, height),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.core.frame() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn scene_id(&self) -> u8 {
        self.core.scene_kind().id()
    }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 {
        self.core.population() as u32
    }

    pub fn set_scene(&mut self, scene_id: u8) -> Result<(), JsValue> {
        let kind = SceneKind::from_id(scene_id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown scene id: {scene_id}")))?;
        self.core.set_scene(kind);
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.core.pointer_moved(x, y);
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.core.set_pointer_down(down);
    }

    /// Advance the simulation by `dt_ms` milliseconds of host time.
    pub fn tick(&mut self, dt_ms: f64) {
        self.core.tick(dt_ms);
    }

    /// Replace the configuration from a JSON document and restart the
    /// active scene with it.
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Rebuild the sprite buffers from the current scene state. Returns
    /// the sprite count; the pointers below stay valid until the next
    /// call to this method or any engine allocation.
    pub fn extract_sprites(&mut self) -> u32 {
        self.core.extract_sprites() as u32
    }

    pub fn sprite_x_ptr(&self) -> *const f32 {
        self.core.sprites().x_ptr()
    }

    pub fn sprite_y_ptr(&self) -> *const f32 {
        self.core.sprites().y_ptr()
    }

    pub fn sprite_w_ptr(&self) -> *const f32 {
        self.core.sprites().w_ptr()
    }

    pub fn sprite_h_ptr(&self) -> *const f32 {
        self.core.sprites().h_ptr()
    }

    pub fn sprite_rot_ptr(&self) -> *const f32 {
        self.core.sprites().rot_ptr()
    }

    pub fn sprite_alpha_ptr(&self) -> *const f32 {
        self.core.sprites().alpha_ptr()
    }

    pub fn sprite_color_ptr(&self) -> *const u32 {
        self.core.sprites().color_ptr()
    }

    pub fn sprite_color2_ptr(&self) -> *const u32 {
        self.core.sprites().color2_ptr()
    }

    pub fn sprite_shape_ptr(&self) -> *const u8 {
        self.core.sprites().shape_ptr()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        AbiLayout::describe()
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
