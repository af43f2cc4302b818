//! Ambienta Engine - Pointer-reactive canvas animations in WASM
//!
//! The engine owns simulation state only. The JS side owns the canvas, the
//! requestAnimationFrame loop and all drawing; each frame it calls
//! `Engine::tick`, then reads sprite data straight out of WASM linear memory
//! via the pointer accessors on the facade.
//!
//! Architecture:
//! - spatial/     - Uniform-grid neighbor index (the sand scene's core)
//! - domain/      - Particles, colors, configuration
//! - systems/     - Physics integration and pointer interaction
//! - scenes/      - The five animations (sand, rain, leaves, fish, paint)
//! - simulation/  - Orchestration and the wasm-bindgen facade

pub mod domain;
pub mod scenes;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use domain::config::EngineConfig;
pub use scenes::SceneKind;
pub use simulation::Engine;
pub use spatial::grid::SpatialGrid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Ambienta WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export scene constants for JS
#[wasm_bindgen]
pub fn scene_sand() -> u8 { scenes::SCENE_SAND }
#[wasm_bindgen]
pub fn scene_rain() -> u8 { scenes::SCENE_RAIN }
#[wasm_bindgen]
pub fn scene_leaves() -> u8 { scenes::SCENE_LEAVES }
#[wasm_bindgen]
pub fn scene_fish() -> u8 { scenes::SCENE_FISH }
#[wasm_bindgen]
pub fn scene_paint() -> u8 { scenes::SCENE_PAINT }

/// Canvas clear color as packed ABGR, matching the sprite color format.
#[wasm_bindgen]
pub fn background_color() -> u32 { domain::color::BG_COLOR }

// Export sprite shape constants for the JS renderer
#[wasm_bindgen]
pub fn shape_rect() -> u8 { simulation::SHAPE_RECT }
#[wasm_bindgen]
pub fn shape_ellipse() -> u8 { simulation::SHAPE_ELLIPSE }
#[wasm_bindgen]
pub fn shape_leaf() -> u8 { simulation::SHAPE_LEAF }
#[wasm_bindgen]
pub fn shape_splash() -> u8 { simulation::SHAPE_SPLASH }
#[wasm_bindgen]
pub fn shape_ribbon() -> u8 { simulation::SHAPE_RIBBON }
