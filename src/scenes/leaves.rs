//! Falling-leaves scene
//!
//! Leaves spawn on a fixed cadence up to a cap, drift down with a
//! sinusoidal sway and individual rotation, and are nudged away from the
//! pointer through a decaying offset so the push feels springy rather
//! than instant. Off-screen leaves are replaced to hold the population.

use std::f32::consts::PI;

use crate::domain::config::{EngineConfig, LeafConfig};
use crate::simulation::random;
use crate::simulation::render::{RenderBuffers, SHAPE_LEAF};

use super::TickContext;

struct Leaf {
    x: f32,
    y: f32,
    radius: f32,
    speed_y: f32,
    rotation_deg: f32,
    rotation_speed: f32,
    sway: f32,
    sway_speed: f32,
    wind: f32,
    color: u32,
    sway_off_x: f32,
    sway_off_y: f32,
}

pub struct LeafScene {
    leaves: Vec<Leaf>,
    spawn_accum_ms: f64,
    width: f32,
    height: f32,
}

impl LeafScene {
    pub fn new(width: f32, height: f32, config: &EngineConfig, rng: &mut u32) -> Self {
        let mut scene = Self {
            leaves: Vec::with_capacity(config.leaves.max_leaves),
            spawn_accum_ms: 0.0,
            width,
            height,
        };
        // The reference starts empty and fills via the spawn timer; seed a
        // few so the first frames are not blank.
        for _ in 0..8 {
            let leaf = scene.make_leaf(rng, &config.leaves);
            scene.leaves.push(leaf);
        }
        scene
    }

    pub fn resize(&mut self, width: f32, height: f32, _config: &EngineConfig, _rng: &mut u32) {
        self.width = width;
        self.height = height;
    }

    fn make_leaf(&self, rng: &mut u32, config: &LeafConfig) -> Leaf {
        Leaf {
            x: random::range(rng, 0.0, self.width),
            y: random::range(rng, 0.0, self.height / 2.0),
            radius: random::range(rng, 9.0, 14.0),
            speed_y: random::range(rng, 0.5, 1.0),
            rotation_deg: random::range(rng, 0.0, 360.0),
            rotation_speed: random::range(rng, -1.0, 1.0),
            sway: random::range(rng, 20.0, 70.0),
            sway_speed: random::range(rng, 0.01, 1.01),
            wind: random::range(rng, 0.0, 0.5),
            color: random::pick(rng, &config.palette).pack(),
            sway_off_x: 0.0,
            sway_off_y: 0.0,
        }
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        let config = ctx.config.leaves.clone();
        self.width = ctx.width;
        self.height = ctx.height;

        // Spawn cadence, independent of frame rate.
        self.spawn_accum_ms += ctx.dt_ms;
        while self.spawn_accum_ms >= config.spawn_interval_ms {
            self.spawn_accum_ms -= config.spawn_interval_ms;
            if self.leaves.len() < config.max_leaves {
                let leaf = self.make_leaf(ctx.rng, &config);
                self.leaves.push(leaf);
            }
        }

        let now = ctx.now_ms as f32;
        for i in 0..self.leaves.len() {
            {
                let leaf = &mut self.leaves[i];

                // Sway away from a close pointer, offset decaying back.
                let dx = ctx.pointer.x - leaf.x;
                let dy = ctx.pointer.y - leaf.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < config.push_radius {
                    let angle = dy.atan2(dx);
                    leaf.sway_off_x += (angle + PI).cos() * config.push_force * ctx.dt;
                    leaf.sway_off_y += (angle + PI).sin() * config.push_force * ctx.dt;
                    let keep = (1.0 - config.push_decay).powf(ctx.dt);
                    leaf.sway_off_x *= keep;
                    leaf.sway_off_y *= keep;
                }

                leaf.y += leaf.speed_y * ctx.dt;
                leaf.x += ((leaf.sway_speed * now).sin() * leaf.sway * 0.01 + leaf.wind) * ctx.dt;
                leaf.rotation_deg += leaf.rotation_speed * ctx.dt;
            }

            // Replace leaves that have left the canvas.
            let gone = {
                let leaf = &self.leaves[i];
                leaf.y > self.height || leaf.y < 0.0 || leaf.x < 0.0 || leaf.x > self.width
            };
            if gone {
                self.leaves[i] = self.make_leaf(ctx.rng, &config);
            }
        }
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        for leaf in &self.leaves {
            out.push(
                leaf.x + leaf.sway_off_x,
                leaf.y + leaf.sway_off_y,
                leaf.radius,
                leaf.radius * 1.5,
                leaf.rotation_deg.to_radians(),
                1.0,
                leaf.color,
                leaf.color,
                SHAPE_LEAF,
            );
        }
    }

    pub fn population(&self) -> usize {
        self.leaves.len()
    }
}
