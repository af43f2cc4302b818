//! Wall-clock timer for perf metrics
//!
//! `std::time::Instant` panics on wasm32 targets, so the browser build
//! reads `Date.now()` instead. Millisecond resolution is plenty for
//! frame-scale timings.

#[cfg(target_arch = "wasm32")]
pub struct PerfTimer {
    start_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl PerfTimer {
    pub fn start() -> Self {
        Self {
            start_ms: js_sys::Date::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.start_ms
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct PerfTimer {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl PerfTimer {
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
