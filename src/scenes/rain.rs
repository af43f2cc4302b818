//! Rain scene - falling drops, pointer umbrella, splashes
//!
//! The drop population breathes between min and max on a slow sine. A
//! circle around the pointer acts as an umbrella: drops entering it burst
//! into small shrinking splashes and recycle to the top, as do drops
//! leaving the canvas.

use crate::domain::color::{RAIN_BLUE, SPLASH_BLUE};
use crate::domain::config::{EngineConfig, RainConfig};
use crate::simulation::random;
use crate::simulation::render::{RenderBuffers, SHAPE_RECT, SHAPE_SPLASH};

use super::TickContext;

const DROP_WIDTH: f32 = 2.0;

struct Drop {
    x: f32,
    y: f32,
    speed_x: f32,
    speed_y: f32,
    height: f32,
    alpha: f32,
}

struct Splash {
    x: f32,
    y: f32,
    size: f32,
}

pub struct RainScene {
    drops: Vec<Drop>,
    splashes: Vec<Splash>,
    /// Phase of the population sine.
    t: f32,
    width: f32,
    height: f32,
}

impl RainScene {
    pub fn new(width: f32, height: f32, config: &EngineConfig, rng: &mut u32) -> Self {
        let mut scene = Self {
            drops: Vec::with_capacity(config.rain.max_drops),
            splashes: Vec::new(),
            t: 0.0,
            width,
            height,
        };
        for _ in 0..config.rain.min_drops {
            let drop = scene.make_drop(rng, &config.rain);
            scene.drops.push(drop);
        }
        scene
    }

    pub fn resize(&mut self, width: f32, height: f32, _config: &EngineConfig, _rng: &mut u32) {
        self.width = width;
        self.height = height;
        // Existing drops keep falling; off-canvas ones recycle on their own.
    }

    fn make_drop(&self, rng: &mut u32, config: &RainConfig) -> Drop {
        Drop {
            x: random::range(rng, 0.0, self.width),
            y: random::range(rng, 0.0, self.height),
            speed_y: random::range(rng, 8.0, 22.0),
            speed_x: config.wind + random::range(rng, 0.0, 1.5),
            height: random::range(rng, 5.0, 13.0),
            alpha: random::range(rng, 0.5, 1.0),
        }
    }

    fn recycle_drop(drop: &mut Drop, rng: &mut u32, width: f32) {
        drop.x = random::range(rng, 0.0, width);
        drop.y = -10.0;
        drop.alpha = random::range(rng, 0.5, 1.0);
    }

    fn burst(&mut self, x: f32, y: f32, rng: &mut u32, config: &RainConfig) {
        for _ in 0..config.splashes_per_hit {
            self.splashes.push(Splash {
                x: x + random::range(rng, -5.0, 5.0),
                y: y + random::range(rng, -2.0, 3.0),
                size: random::range(rng, 1.0, 4.0),
            });
        }
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        let config = ctx.config.rain.clone();
        self.width = ctx.width;
        self.height = ctx.height;

        // Population breathes on a sine between min and max.
        self.t += config.oscillation_rate * ctx.dt;
        let oscillation = (1.0 + self.t.sin()) / 2.0;
        let range = config.max_drops.saturating_sub(config.min_drops);
        let target = config.min_drops + (range as f32 * oscillation).round() as usize;

        while self.drops.len() < target {
            let drop = self.make_drop(ctx.rng, &config);
            self.drops.push(drop);
        }
        self.drops.truncate(target);

        let mut hits: Vec<(f32, f32)> = Vec::new();
        for drop in &mut self.drops {
            drop.y += drop.speed_y * ctx.dt;
            drop.x += drop.speed_x * ctx.dt;

            let dx = drop.x - ctx.pointer.x;
            let dy = drop.y - ctx.pointer.y;
            if (dx * dx + dy * dy).sqrt() < config.umbrella_radius {
                hits.push((drop.x, drop.y));
                Self::recycle_drop(drop, ctx.rng, ctx.width);
                continue;
            }

            if drop.y > ctx.height || drop.x > ctx.width {
                hits.push((drop.x, ctx.height));
                Self::recycle_drop(drop, ctx.rng, ctx.width);
            }
        }
        for (x, y) in hits {
            self.burst(x, y, ctx.rng, &config);
        }

        let decay = config.splash_decay * ctx.dt;
        for splash in &mut self.splashes {
            splash.size -= decay;
        }
        self.splashes.retain(|s| s.size > 0.0);
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        let drop_color = RAIN_BLUE.pack();
        for drop in &self.drops {
            // Cull drops above/below the canvas; the renderer never sees them.
            if drop.y < 0.0 || drop.y > self.height {
                continue;
            }
            out.push(
                drop.x,
                drop.y,
                DROP_WIDTH,
                drop.height,
                0.0,
                drop.alpha,
                drop_color,
                drop_color,
                SHAPE_RECT,
            );
        }
        let splash_color = SPLASH_BLUE.pack();
        for splash in &self.splashes {
            out.push(
                splash.x,
                splash.y,
                splash.size,
                splash.size,
                0.0,
                1.0,
                splash_color,
                splash_color,
                SHAPE_SPLASH,
            );
        }
    }

    pub fn population(&self) -> usize {
        self.drops.len()
    }

    pub fn splash_count(&self) -> usize {
        self.splashes.len()
    }
}
