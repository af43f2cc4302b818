//! Paint-streams scene
//!
//! Ribbons of paint fall from above the canvas, each a chain of trailing
//! segments that thin and fade toward the tail. Segments near the pointer
//! distort away from it (harder while pressed) and the stream slows; both
//! effects relax back once the pointer leaves. A stream resets above the
//! top edge after it has fully cleared the bottom.

use crate::domain::color::Rgb;
use crate::domain::config::{EngineConfig, PaintConfig};
use crate::simulation::random;
use crate::simulation::render::{RenderBuffers, SHAPE_RIBBON};

use super::TickContext;

/// Vertical spacing between stream segments, px.
const SEGMENT_SPACING: f32 = 15.0;

struct Segment {
    off_y: f32,
    width: f32,
    alpha: f32,
    dist_x: f32,
    dist_y: f32,
}

struct Stream {
    x: f32,
    y: f32,
    width: f32,
    speed_y: f32,
    base_speed_y: f32,
    color: Rgb,
    highlight: Rgb,
    wave_freq: f32,
    segments: Vec<Segment>,
}

impl Stream {
    fn reset(&mut self, rng: &mut u32, width: f32, config: &PaintConfig) {
        self.x = random::range(rng, 0.0, width);
        self.y = -20.0;
        self.width = random::range(rng, 8.0, 23.0);
        self.base_speed_y = random::range(rng, 2.0, 4.0);
        self.speed_y = self.base_speed_y;
        self.color = *random::pick(rng, &config.palette);
        // Same +50-per-channel highlight the reference derived by string
        // math, now an explicit transform.
        self.highlight = self.color.lighten(50);
        self.wave_freq = random::range(rng, 0.01, 0.04);

        let length = random::range(rng, 20.0, 35.0) as usize;
        self.segments.clear();
        for i in 0..length {
            self.segments.push(Segment {
                off_y: -(i as f32) * SEGMENT_SPACING,
                width: self.width - i as f32 * 0.2,
                alpha: 1.0 - (i as f32 / length as f32) * 0.8,
                dist_x: 0.0,
                dist_y: 0.0,
            });
        }
    }
}

pub struct PaintScene {
    streams: Vec<Stream>,
    width: f32,
    height: f32,
}

impl PaintScene {
    pub fn new(width: f32, height: f32, config: &EngineConfig, rng: &mut u32) -> Self {
        let mut streams = Vec::with_capacity(config.paint.stream_count);
        for _ in 0..config.paint.stream_count {
            let mut stream = Stream {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                speed_y: 0.0,
                base_speed_y: 0.0,
                color: Rgb::new(0, 0, 0),
                highlight: Rgb::new(0, 0, 0),
                wave_freq: 0.0,
                segments: Vec::new(),
            };
            stream.reset(rng, width, &config.paint);
            // Stagger entry so streams do not arrive as one curtain.
            stream.y = random::range(rng, -100.0, 0.0);
            streams.push(stream);
        }
        Self { streams, width, height }
    }

    pub fn resize(&mut self, width: f32, height: f32, _config: &EngineConfig, _rng: &mut u32) {
        self.width = width;
        self.height = height;
    }

    pub fn tick(&mut self, ctx: &mut TickContext) {
        let config = ctx.config.paint.clone();
        self.width = ctx.width;
        self.height = ctx.height;

        let px = ctx.pointer.x;
        let py = ctx.pointer.y;
        let relax = config.relax.powf(ctx.dt);

        for stream in &mut self.streams {
            stream.y += stream.speed_y * ctx.dt;
            // Subtle lateral wave.
            stream.x += (stream.y * stream.wave_freq).sin() * 0.5 * ctx.dt;

            for i in 0..stream.segments.len() {
                let seg_y = stream.y + stream.segments[i].off_y;
                let dx = stream.x - px;
                let dy = seg_y - py;
                let dist = (dx * dx + dy * dy).sqrt();

                let seg = &mut stream.segments[i];
                if dist < config.pointer_radius {
                    let angle = dy.atan2(dx);
                    let force = (config.pointer_radius - dist) / config.pointer_radius;
                    let multiplier = if ctx.pointer.down {
                        config.press_distortion
                    } else {
                        config.hover_distortion
                    };
                    seg.dist_x = angle.cos() * force * 15.0 * multiplier;
                    seg.dist_y = angle.sin() * force * 8.0 * multiplier;
                    if i == 0 {
                        stream.speed_y = stream.base_speed_y * (1.0 - force * 0.5);
                    }
                } else {
                    seg.dist_x *= relax;
                    seg.dist_y *= relax;
                    if i == 0 {
                        stream.speed_y =
                            stream.speed_y * relax + stream.base_speed_y * (1.0 - relax);
                    }
                }
            }

            // Reset once the slowest (top-most) segment has cleared the
            // bottom edge.
            let top_off = stream.segments.last().map(|s| s.off_y).unwrap_or(0.0);
            if stream.y - top_off > ctx.height {
                stream.reset(ctx.rng, ctx.width, &config);
            }
        }
    }

    pub fn emit_sprites(&self, out: &mut RenderBuffers) {
        for stream in &self.streams {
            let base = stream.color.pack();
            let highlight = stream.highlight.pack();
            for seg in &stream.segments {
                let seg_y = stream.y + seg.off_y;
                // Off-canvas segments are culled engine-side.
                if seg_y < -20.0 || seg_y > self.height + 20.0 {
                    continue;
                }
                out.push(
                    stream.x + seg.dist_x,
                    seg_y + seg.dist_y,
                    seg.width,
                    SEGMENT_SPACING,
                    0.0,
                    seg.alpha,
                    base,
                    highlight,
                    SHAPE_RIBBON,
                );
            }
        }
    }

    pub fn population(&self) -> usize {
        self.streams.len()
    }
}
