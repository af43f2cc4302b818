//! ParticleStore - Structure of Arrays particle storage
//!
//! Instead of: Vec<Particle>        // many loads per field, poor cache
//! We have:    x[], y[], vx[], vy[], colors[]  // linear memory
//!
//! The store is the single owner of particle state. The spatial grid only
//! ever borrows indices into it, and those indices expire on the next
//! rebuild.

/// SoA particle store - positions, velocities and packed ABGR colors.
pub struct ParticleStore {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub colors: Vec<u32>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            vx: Vec::with_capacity(capacity),
            vy: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn push(&mut self, x: f32, y: f32, vx: f32, vy: f32, color: u32) {
        self.x.push(x);
        self.y.push(y);
        self.vx.push(vx);
        self.vy.push(vy);
        self.colors.push(color);
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.vx.clear();
        self.vy.clear();
        self.colors.clear();
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}
