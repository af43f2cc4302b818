//! InteractionDriver - sub-stepped pointer repulsion
//!
//! A single input event can jump the pointer a long way. Reacting only at
//! the new position would tunnel straight past particles in between, so the
//! driver interpolates the move into fixed sub-steps and runs one grid
//! query per sub-step. Both endpoints are sampled, so a sweep from P0 to P1
//! with N sub-steps issues N+1 queries.

use crate::domain::config::SandConfig;
use crate::domain::particle::ParticleStore;
use crate::spatial::grid::SpatialGrid;

/// Interpolated sample points of a pointer move, endpoints included.
pub fn sweep_positions(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    steps: u32,
) -> impl Iterator<Item = (f32, f32)> {
    let steps = steps.max(1);
    let step_x = (x1 - x0) / steps as f32;
    let step_y = (y1 - y0) / steps as f32;
    (0..=steps).map(move |i| (x0 + step_x * i as f32, y0 + step_y * i as f32))
}

/// Tracks the previous pointer position and turns each move event into a
/// swept series of repulsion impulses.
pub struct InteractionDriver {
    last_x: f32,
    last_y: f32,
    scratch: Vec<u32>,
}

impl InteractionDriver {
    pub fn new() -> Self {
        Self {
            last_x: 0.0,
            last_y: 0.0,
            scratch: Vec::with_capacity(9),
        }
    }

    /// Apply repulsion along the path from the previous pointer position to
    /// `(x, y)`, then remember `(x, y)` for the next event.
    ///
    /// Every neighbor the grid returns within `interaction_radius` of a
    /// sub-step point gets a velocity impulse of
    /// `(1 - distance/radius) * strength` directed away from the point.
    /// Impulses are not clamped; damping takes care of runaway velocity.
    pub fn pointer_moved(
        &mut self,
        x: f32,
        y: f32,
        grid: &SpatialGrid,
        store: &mut ParticleStore,
        config: &SandConfig,
    ) {
        for (ix, iy) in sweep_positions(self.last_x, self.last_y, x, y, config.substeps) {
            grid.neighbors_into(ix, iy, &mut self.scratch);
            for &p in &self.scratch {
                let p = p as usize;
                if p >= store.len() {
                    continue;
                }
                let pdx = store.x[p] - ix;
                let pdy = store.y[p] - iy;
                let dist = (pdx * pdx + pdy * pdy).sqrt();

                if dist < config.interaction_radius {
                    let angle = pdy.atan2(pdx);
                    let force =
                        (1.0 - dist / config.interaction_radius) * config.interaction_strength;
                    store.vx[p] += angle.cos() * force;
                    store.vy[p] += angle.sin() * force;
                }
            }
        }

        self.last_x = x;
        self.last_y = y;
    }

    /// Forget the previous pointer position (used when the scene restarts).
    pub fn reset(&mut self, x: f32, y: f32) {
        self.last_x = x;
        self.last_y = y;
    }
}

impl Default for InteractionDriver {
    fn default() -> Self {
        Self::new()
    }
}
