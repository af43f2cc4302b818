//! Structured color - RGB triples with explicit transforms
//!
//! Colors are plain (r, g, b) values, lightened/darkened by channel
//! arithmetic and packed to ABGR for direct canvas consumption
//! (little-endian 0xAABBGGRR -> bytes [RR, GG, BB, AA]).

use serde::{Deserialize, Serialize};

/// Canvas background for the sand scene, ABGR. RGB(0,0,0), alpha 255.
pub const BG_COLOR: u32 = 0xFF000000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack to ABGR with the given alpha (0-255).
    #[inline]
    pub fn pack_abgr(self, alpha: u8) -> u32 {
        ((alpha as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// Pack fully opaque.
    #[inline]
    pub fn pack(self) -> u32 {
        self.pack_abgr(255)
    }

    /// Add `amount` to every channel, saturating at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Subtract `amount` from every channel, saturating at 0.
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

// === Scene palettes ===

/// Light to dark sand tones.
pub const SAND_PALETTE: [Rgb; 4] = [
    Rgb::new(0xe6, 0xc8, 0x9c),
    Rgb::new(0xd4, 0xb4, 0x83),
    Rgb::new(0xc1, 0x9a, 0x6b),
    Rgb::new(0xb3, 0x8b, 0x5d),
];

/// Autumn leaf tones.
pub const LEAF_PALETTE: [Rgb; 3] = [
    Rgb::new(0xff, 0x45, 0x00),
    Rgb::new(0xff, 0x8c, 0x00),
    Rgb::new(0xff, 0xd7, 0x00),
];

/// Paint stream tones: yellow, magenta, orange.
pub const PAINT_PALETTE: [Rgb; 3] = [
    Rgb::new(0xff, 0xdd, 0x00),
    Rgb::new(0xff, 0x00, 0xff),
    Rgb::new(0xff, 0x7f, 0x00),
];

/// Raindrop blue (the JS side layers its own gradient on top).
pub const RAIN_BLUE: Rgb = Rgb::new(0xad, 0xd8, 0xe6);

/// Splash highlight.
pub const SPLASH_BLUE: Rgb = Rgb::new(0xad, 0xd8, 0xe6);

/// Fish orange.
pub const FISH_ORANGE: Rgb = Rgb::new(0xff, 0xa5, 0x00);
