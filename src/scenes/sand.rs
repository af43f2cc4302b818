//! Sand scene - grid-indexed pointer repulsion
//!
//! The flagship scene and the consumer of the spatial grid: a field of
//! sand grains sits still until the pointer sweeps through and shoves
//! nearby grains aside. Per tick the grid is rebuilt from the store, then
//! positions integrate with damping. Repulsion itself happens on pointer
//! events, against the grid built on the previous tick - exactly the
//! reference behavior.

use crate::domain::config::EngineConfig;
use crate::domain::particle::ParticleStore;
use crate::simulation::random;
use crate::simulation::render::{RenderBuffers, SHAPE_RECT};
use crate::spatial::grid::SpatialGrid;
use crate::systems::interaction::InteractionDriver;
use crate::systems::physics;

use super::TickContext;

pub struct SandScene {
    store: ParticleStore,
    grid: SpatialGrid,
    driver: InteractionDriver,
}

impl SandScene {
    pub fn new(width: f32, height: f32, config: &EngineConfig, rng: &mut u32) -> Self {
        let mut scene = Self {
            store: ParticleStore::new(),
            grid: SpatialGrid::new(config.sand.particle_size, width, height),
            driver: InteractionDriver::new(),
        };
        scene.populate(width, height, config, rng);
        scene
    }

    fn populate(&mut self, width: f32, height: f32, config: &EngineConfig, rng: &mut u32) {
        let sand = &config.sand;
        let target = ((width * height * sand.density) as usize).min(sand.max_particles);

        self.store.clear();
        for _ in 0..target {
            let x = random::range(rng, 0.0, width);
            let y = random::range(rng, 0.0, height);
            let color = random::pick(rng, &sand.palette).pack();
            self.store.push(x, y, 0.0, 0.0, color);
        }
        // Fresh grid state so pointer events before the first tick query
        // current extents, never stale ones.
        self.grid
            .rebuild(&self.store.x, &self.store.y, sand.particle_size, width, height);
    }

    /// Re-seed for the new canvas. The population target depends on area,
    /// so a resize is a restart, as in the reference.
    pub fn resize(&mut self, width: f32, height: f32, config: &EngineConfig, rng: &mut u32) {
        self.populate(width, height, config, rng);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32, config: &EngineConfig) {
        self.driver
            .pointer_moved(x, y, &self.grid, &mut self.store, &config.sand);
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        let sand = &ctx.config.sand;
        self.grid.rebuild(
            &self.store.x,
            &self.store.y,
            sand.particle_size,
            ctx.width,
            ctx.height,
        );
        physics::integrate(&mut self.store, sand.damping, ctx.dt);
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        // Grain size rides along in the sprite; all grains share it, but
        // the renderer should not have to know that.
        let size = self.grid.cell_size();
        for i in 0..self.store.len() {
            let color = self.store.colors[i];
            out.push(
                self.store.x[i],
                self.store.y[i],
                size,
                size,
                0.0,
                1.0,
                color,
                color,
                SHAPE_RECT,
            );
        }
    }

    pub fn population(&self) -> usize {
        self.store.len()
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }
}
