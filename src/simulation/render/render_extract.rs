//! Sprite extraction: scene state -> flat transfer buffers
//!
//! The host renders from these SoA buffers via raw pointers, zero-copy.
//! Layout per sprite: position, size, rotation, alpha, two packed ABGR
//! colors and a shape tag telling the renderer what to draw.

use super::EngineCore;

pub const SHAPE_RECT: u8 = 0;
pub const SHAPE_ELLIPSE: u8 = 1;
pub const SHAPE_LEAF: u8 = 2;
pub const SHAPE_SPLASH: u8 = 3;
pub const SHAPE_RIBBON: u8 = 4;

/// Parallel per-sprite arrays. All vectors always have equal length;
/// `push` is the only way anything gets in.
#[derive(Default)]
pub struct RenderBuffers {
    pub(super) x: Vec<f32>,
    pub(super) y: Vec<f32>,
    pub(super) w: Vec<f32>,
    pub(super) h: Vec<f32>,
    pub(super) rot: Vec<f32>,
    pub(super) alpha: Vec<f32>,
    pub(super) color: Vec<u32>,
    pub(super) color2: Vec<u32>,
    pub(super) shape: Vec<u8>,
}

impl RenderBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rot: f32,
        alpha: f32,
        color: u32,
        color2: u32,
        shape: u8,
    ) {
        self.x.push(x);
        self.y.push(y);
        self.w.push(w);
        self.h.push(h);
        self.rot.push(rot);
        self.alpha.push(alpha);
        self.color.push(color);
        self.color2.push(color2);
        self.shape.push(shape);
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.w.clear();
        self.h.clear();
        self.rot.clear();
        self.alpha.clear();
        self.color.clear();
        self.color2.clear();
        self.shape.clear();
    }

    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Sprite center, handy for hosts and tests that read by index
    /// instead of through the raw pointers.
    pub fn position(&self, i: usize) -> (f32, f32) {
        (self.x[i], self.y[i])
    }

    pub fn x_ptr(&self) -> *const f32 { self.x.as_ptr() }
    pub fn y_ptr(&self) -> *const f32 { self.y.as_ptr() }
    pub fn w_ptr(&self) -> *const f32 { self.w.as_ptr() }
    pub fn h_ptr(&self) -> *const f32 { self.h.as_ptr() }
    pub fn rot_ptr(&self) -> *const f32 { self.rot.as_ptr() }
    pub fn alpha_ptr(&self) -> *const f32 { self.alpha.as_ptr() }
    pub fn color_ptr(&self) -> *const u32 { self.color.as_ptr() }
    pub fn color2_ptr(&self) -> *const u32 { self.color2.as_ptr() }
    pub fn shape_ptr(&self) -> *const u8 { self.shape.as_ptr() }
}

/// Rebuild the transfer buffers from the active scene. Capacity is
/// retained across frames, so steady-state extraction allocates nothing.
pub fn extract_sprites(core: &mut EngineCore) -> usize {
    core.render.clear();
    core.scene.emit_sprites(&mut core.render);
    core.render.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_arrays_parallel() {
        let mut buf = RenderBuffers::new();
        buf.push(1.0, 2.0, 3.0, 4.0, 0.5, 1.0, 0xFF00FF00, 0xFFFFFFFF, SHAPE_LEAF);
        buf.push(5.0, 6.0, 7.0, 8.0, 0.0, 0.5, 0xFF0000FF, 0xFF0000FF, SHAPE_RECT);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.x.len(), buf.shape.len());
        assert_eq!(buf.color2.len(), 2);
        assert_eq!(buf.shape, vec![SHAPE_LEAF, SHAPE_RECT]);
    }

    #[test]
    fn clear_empties_every_array() {
        let mut buf = RenderBuffers::new();
        buf.push(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0, 0, SHAPE_SPLASH);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.alpha.len(), 0);
    }
}
