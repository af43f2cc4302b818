//! Fish-tank scene
//!
//! A small school with three moods: the whole tank flees for a fixed time
//! when the pointer gets too close to any fish, the closest fish inside a
//! larger range swims over to investigate, and everyone else wanders on a
//! leash around the canvas center. A pairwise separation pass keeps fish
//! from stacking.

use std::f32::consts::TAU;

use crate::domain::color::FISH_ORANGE;
use crate::domain::config::{EngineConfig, FishConfig};
use crate::simulation::random;
use crate::simulation::render::{RenderBuffers, SHAPE_ELLIPSE};

use super::TickContext;

struct Fish {
    x: f32,
    y: f32,
    speed: f32,
    fleeing: bool,
    flee_until_ms: f64,
}

pub struct FishScene {
    fish: Vec<Fish>,
    body_width: f32,
    body_height: f32,
    width: f32,
    height: f32,
}

impl FishScene {
    pub fn new(width: f32, height: f32, config: &EngineConfig, rng: &mut u32) -> Self {
        let mut fish = Vec::with_capacity(config.fish.count);
        for _ in 0..config.fish.count {
            fish.push(Fish {
                x: random::range(rng, 0.0, width),
                y: random::range(rng, 0.0, height),
                speed: random::range(rng, 1.0, 3.0),
                fleeing: false,
                flee_until_ms: 0.0,
            });
        }
        Self {
            fish,
            body_width: config.fish.body_width,
            body_height: config.fish.body_height,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, _config: &EngineConfig, _rng: &mut u32) {
        self.width = width;
        self.height = height;
    }

    /// Index of the closest non-fleeing fish within investigate range.
    fn closest_curious(&self, px: f32, py: f32, config: &FishConfig) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, fish) in self.fish.iter().enumerate() {
            if fish.fleeing {
                continue;
            }
            let dx = fish.x - px;
            let dy = fish.y - py;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < config.investigate_radius && best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        let config = ctx.config.fish.clone();
        self.width = ctx.width;
        self.height = ctx.height;

        let px = ctx.pointer.x;
        let py = ctx.pointer.y;
        let curious = self.closest_curious(px, py, &config);

        // Any fish too close to the pointer spooks the whole school.
        let spooked = self.fish.iter().any(|f| {
            let dx = f.x - px;
            let dy = f.y - py;
            (dx * dx + dy * dy).sqrt() < config.flee_radius
        });
        if spooked {
            for fish in &mut self.fish {
                fish.fleeing = true;
                fish.flee_until_ms = ctx.now_ms + config.flee_duration_ms;
            }
        }

        let center_x = ctx.width / 2.0;
        let center_y = ctx.height / 2.0;

        for i in 0..self.fish.len() {
            let fish = &mut self.fish[i];
            let dx = fish.x - px;
            let dy = fish.y - py;

            if fish.fleeing {
                let angle = dy.atan2(dx);
                let speed = fish.speed * config.flee_speed_multiplier;
                fish.x += angle.cos() * speed * ctx.dt;
                fish.y += angle.sin() * speed * ctx.dt;
                if ctx.now_ms > fish.flee_until_ms {
                    fish.fleeing = false;
                }
            } else if curious == Some(i) {
                // Swim toward the pointer.
                let angle = dy.atan2(dx);
                fish.x -= angle.cos() * fish.speed * ctx.dt;
                fish.y -= angle.sin() * fish.speed * ctx.dt;
            } else {
                let to_center_x = center_x - fish.x;
                let to_center_y = center_y - fish.y;
                let dist_center = (to_center_x * to_center_x + to_center_y * to_center_y).sqrt();
                if dist_center > config.home_radius {
                    let angle = to_center_y.atan2(to_center_x);
                    fish.x += angle.cos() * fish.speed * ctx.dt;
                    fish.y += angle.sin() * fish.speed * ctx.dt;
                } else {
                    // Near home: aimless wandering.
                    let angle = random::range(ctx.rng, 0.0, TAU);
                    fish.x += angle.cos() * fish.speed * ctx.dt;
                    fish.y += angle.sin() * fish.speed * ctx.dt;
                }
            }
        }

        self.separate(&config, ctx.dt);
    }

    /// Push overlapping fish apart along the line between them.
    fn separate(&mut self, config: &FishConfig, dt: f32) {
        let min_dist = config.body_width;
        for i in 0..self.fish.len() {
            for j in (i + 1)..self.fish.len() {
                let dx = self.fish[i].x - self.fish[j].x;
                let dy = self.fish[i].y - self.fish[j].y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < min_dist {
                    let angle = dy.atan2(dx);
                    let (push_i, push_j) = (self.fish[i].speed * dt, self.fish[j].speed * dt);
                    self.fish[i].x += angle.cos() * push_i;
                    self.fish[i].y += angle.sin() * push_i;
                    self.fish[j].x -= angle.cos() * push_j;
                    self.fish[j].y -= angle.sin() * push_j;
                }
            }
        }
    }

    pub fn is_fleeing(&self) -> bool {
        self.fish.iter().any(|f| f.fleeing)
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        let color = FISH_ORANGE.pack();
        for fish in &self.fish {
            out.push(
                fish.x,
                fish.y,
                self.body_width,
                self.body_height,
                0.0,
                1.0,
                color,
                color,
                SHAPE_ELLIPSE,
            );
        }
    }

    pub fn population(&self) -> usize {
        self.fish.len()
    }
}
