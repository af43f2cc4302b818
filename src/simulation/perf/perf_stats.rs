//! Per-tick perf snapshot exposed to the host

use wasm_bindgen::prelude::*;

/// Timings from the most recent tick, all in milliseconds. Zeroed while
/// perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) scene_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) entities: u32,
    pub(super) sprites: u32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    #[wasm_bindgen(getter)]
    pub fn scene_ms(&self) -> f64 {
        self.scene_ms
    }

    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 {
        self.extract_ms
    }

    #[wasm_bindgen(getter)]
    pub fn entities(&self) -> u32 {
        self.entities
    }

    #[wasm_bindgen(getter)]
    pub fn sprites(&self) -> u32 {
        self.sprites
    }
}
