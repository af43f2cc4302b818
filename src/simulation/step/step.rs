//! Tick: advance the simulation by one host-supplied time slice
//!
//! `dt_ms` comes from the host scheduler (requestAnimationFrame deltas,
//! a test harness, whatever); the engine never reads a clock of its own.
//! Internally time is normalized to 60Hz frame units so the per-frame
//! motion constants keep their meaning at any frame rate.

use crate::scenes::TickContext;

use super::{EngineCore, PerfTimer};

/// Milliseconds per frame at the 60Hz reference rate.
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Clamp for pathological deltas (tab was backgrounded, debugger pause).
/// Caps a single tick at ~15 frames of catch-up.
const MAX_DT_MS: f64 = 250.0;

pub fn tick(core: &mut EngineCore, dt_ms: f64) {
    if !dt_ms.is_finite() || dt_ms <= 0.0 {
        return;
    }
    let dt_ms = dt_ms.min(MAX_DT_MS);

    let timer = core.perf_enabled.then(PerfTimer::start);

    core.clock_ms += dt_ms;
    let dt = (dt_ms / FRAME_MS) as f32;

    let scene_timer = core.perf_enabled.then(PerfTimer::start);
    {
        // Split borrows: the scene gets the rest of the core by field.
        let EngineCore {
            ref mut scene,
            ref config,
            ref mut rng_state,
            pointer,
            width,
            height,
            clock_ms,
            ..
        } = *core;
        let mut ctx = TickContext {
            dt,
            dt_ms,
            now_ms: clock_ms,
            width,
            height,
            pointer,
            rng: rng_state,
            config,
        };
        scene.tick(&mut ctx);
    }
    if let Some(t) = scene_timer {
        core.perf_stats.scene_ms = t.elapsed_ms();
    }

    core.frame += 1;

    if let Some(t) = timer {
        core.perf_stats.tick_ms = t.elapsed_ms();
        core.perf_stats.entities = core.scene.population() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::SceneKind;

    #[test]
    fn tick_advances_frame_and_clock() {
        let mut core = EngineCore::new(SceneKind::Leaves, 400.0, 300.0);
        core.tick(16.0);
        core.tick(16.0);
        assert_eq!(core.frame(), 2);
    }

    #[test]
    fn bad_deltas_are_ignored() {
        let mut core = EngineCore::new(SceneKind::Leaves, 400.0, 300.0);
        core.tick(f64::NAN);
        core.tick(-5.0);
        core.tick(0.0);
        assert_eq!(core.frame(), 0);
    }

    #[test]
    fn perf_stats_populated_when_enabled() {
        let mut core = EngineCore::new(SceneKind::Rain, 400.0, 300.0);
        core.enable_perf_metrics(true);
        core.tick(16.0);
        let stats = core.get_perf_stats();
        assert!(stats.tick_ms() >= 0.0);
        assert!(stats.entities() > 0);
    }
}
