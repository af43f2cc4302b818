//! Scenes - the five animations
//!
//! Each scene owns its entities and implements the same small surface:
//! tick, pointer events, resize, sprite emission. The simulation context
//! dispatches over the enum; adding a scene means adding a module and an
//! arm here, nothing else changes.

mod fish;
mod leaves;
mod paint;
mod rain;
mod sand;

pub use fish::FishScene;
pub use leaves::LeafScene;
pub use paint::PaintScene;
pub use rain::RainScene;
pub use sand::SandScene;

use crate::domain::config::EngineConfig;
use crate::simulation::render::RenderBuffers;

// Scene ids shared with the JS side
pub const SCENE_SAND: u8 = 0;
pub const SCENE_RAIN: u8 = 1;
pub const SCENE_LEAVES: u8 = 2;
pub const SCENE_FISH: u8 = 3;
pub const SCENE_PAINT: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Sand,
    Rain,
    Leaves,
    Fish,
    Paint,
}

impl SceneKind {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            SCENE_SAND => Some(Self::Sand),
            SCENE_RAIN => Some(Self::Rain),
            SCENE_LEAVES => Some(Self::Leaves),
            SCENE_FISH => Some(Self::Fish),
            SCENE_PAINT => Some(Self::Paint),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Sand => SCENE_SAND,
            Self::Rain => SCENE_RAIN,
            Self::Leaves => SCENE_LEAVES,
            Self::Fish => SCENE_FISH,
            Self::Paint => SCENE_PAINT,
        }
    }
}

/// Latest pointer sample, held by the simulation context between events.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Per-tick context passed to scenes. `dt` is in 60Hz frame units so the
/// reference per-frame constants keep their meaning; `now_ms` is the
/// engine's own accumulated clock, not wall time, so the simulation stays
/// scheduling-agnostic.
pub struct TickContext<'a> {
    pub dt: f32,
    pub dt_ms: f64,
    pub now_ms: f64,
    pub width: f32,
    pub height: f32,
    pub pointer: PointerState,
    pub rng: &'a mut u32,
    pub config: &'a EngineConfig,
}

pub enum Scene {
    Sand(SandScene),
    Rain(RainScene),
    Leaves(LeafScene),
    Fish(FishScene),
    Paint(PaintScene),
}

impl Scene {
    pub fn create(
        kind: SceneKind,
        width: f32,
        height: f32,
        config: &EngineConfig,
        rng: &mut u32,
    ) -> Self {
        match kind {
            SceneKind::Sand => Self::Sand(SandScene::new(width, height, config, rng)),
            SceneKind::Rain => Self::Rain(RainScene::new(width, height, config, rng)),
            SceneKind::Leaves => Self::Leaves(LeafScene::new(width, height, config, rng)),
            SceneKind::Fish => Self::Fish(FishScene::new(width, height, config, rng)),
            SceneKind::Paint => Self::Paint(PaintScene::new(width, height, config, rng)),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Sand(_) => SceneKind::Sand,
            Self::Rain(_) => SceneKind::Rain,
            Self::Leaves(_) => SceneKind::Leaves,
            Self::Fish(_) => SceneKind::Fish,
            Self::Paint(_) => SceneKind::Paint,
        }
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        match self {
            Self::Sand(s) => s.tick(ctx),
            Self::Rain(s) => s.tick(ctx),
            Self::Leaves(s) => s.tick(ctx),
            Self::Fish(s) => s.tick(ctx),
            Self::Paint(s) => s.tick(ctx),
        }
    }

    /// Pointer-move hook. Only the sand scene reacts eagerly (its repulsion
    /// sweep is event-driven); the others read the pointer during tick.
    pub fn pointer_moved(&mut self, x: f32, y: f32, config: &EngineConfig) {
        if let Self::Sand(s) = self {
            s.pointer_moved(x, y, config);
        }
    }

    /// Canvas resize. Runs synchronously so no tick ever sees stale extents.
    pub fn resize(&mut self, width: f32, height: f32, config: &EngineConfig, rng: &mut u32) {
        match self {
            Self::Sand(s) => s.resize(width, height, config, rng),
            Self::Rain(s) => s.resize(width, height, config, rng),
            Self::Leaves(s) => s.resize(width, height, config, rng),
            Self::Fish(s) => s.resize(width, height, config, rng),
            Self::Paint(s) => s.resize(width, height, config, rng),
        }
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        match self {
            Self::Sand(s) => s.emit_sprites(out),
            Self::Rain(s) => s.emit_sprites(out),
            Self::Leaves(s) => s.emit_sprites(out),
            Self::Fish(s) => s.emit_sprites(out),
            Self::Paint(s) => s.emit_sprites(out),
        }
    }

    /// Number of live entities (particles, drops, leaves, fish, streams).
    pub fn population(&self) -> usize {
        match self {
            Self::Sand(s) => s.population(),
            Self::Rain(s) => s.population(),
            Self::Leaves(s) => s.population(),
            Self::Fish(s) => s.population(),
            Self::Paint(s) => s.population(),
        }
    }
}
