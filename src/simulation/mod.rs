//! EngineCore - the simulation context
//!
//! Orchestration only: scenes own their entities, systems do the work.
//! There is exactly one logical thread of control - the host's render
//! loop - so the core is mutated in place with no locking. Cancellation is
//! implicit: the host just stops calling `tick` and drops the facade.

use crate::domain::config::EngineConfig;
use crate::scenes::{PointerState, Scene, SceneKind};

#[path = "commands/commands.rs"]
mod commands;
mod facade;
#[path = "init/init.rs"]
mod init;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "init/random.rs"]
pub(crate) mod random;
#[path = "render/render_extract.rs"]
pub mod render;
#[path = "step/step.rs"]
mod step;

pub use facade::{AbiLayout, Engine};
pub use perf_stats::PerfStats;
pub use render::{
    RenderBuffers, SHAPE_ELLIPSE, SHAPE_LEAF, SHAPE_RECT, SHAPE_RIBBON, SHAPE_SPLASH,
};

use perf_timer::PerfTimer;

/// The simulation context: one per engine instance, owned by the facade,
/// passed by reference everywhere. No module-level state anywhere.
pub struct EngineCore {
    config: EngineConfig,
    scene: Scene,

    // Canvas extents as last reported by the host
    width: f32,
    height: f32,

    pointer: PointerState,
    render: render::RenderBuffers,

    // State
    frame: u64,
    clock_ms: f64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create a new engine core for the given scene and canvas size.
    pub fn new(kind: SceneKind, width: f32, height: f32) -> Self {
        init::create_engine_core(kind, width, height)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn scene_kind(&self) -> SceneKind { self.scene.kind() }

    /// Live entity count of the active scene.
    pub fn population(&self) -> usize { self.scene.population() }

    pub fn config(&self) -> &EngineConfig { &self.config }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Switch the active scene, rebuilding its population.
    pub fn set_scene(&mut self, kind: SceneKind) {
        commands::set_scene(self, kind);
    }

    /// Canvas resize: extents update synchronously, before the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    /// Pointer move event from the host.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        commands::pointer_moved(self, x, y);
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        commands::set_pointer_down(self, down);
    }

    /// Replace the configuration from JSON and restart the active scene.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        commands::load_config_json(self, json)
    }

    /// Advance the simulation by `dt_ms` of host time.
    pub fn tick(&mut self, dt_ms: f64) {
        step::tick(self, dt_ms);
    }

    /// Fill the sprite transfer buffers from the active scene. Returns the
    /// sprite count; the buffers stay valid until the next call.
    pub fn extract_sprites(&mut self) -> usize {
        if self.perf_enabled {
            let timer = PerfTimer::start();
            let count = render::extract_sprites(self);
            self.perf_stats.extract_ms = timer.elapsed_ms();
            self.perf_stats.sprites = count as u32;
            count
        } else {
            render::extract_sprites(self)
        }
    }

    pub fn sprites(&self) -> &render::RenderBuffers {
        &self.render
    }

    #[cfg(test)]
    pub(crate) fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
