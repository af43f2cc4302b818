//! EngineConfig - per-scene tunables, loadable from JSON
//!
//! Every knob ships with a compiled-in default matching the reference
//! animations; the host may override any subset through
//! `Engine::load_config` with a partial JSON document.

use serde::{Deserialize, Serialize};

use super::color::{Rgb, LEAF_PALETTE, PAINT_PALETTE, SAND_PALETTE};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sand: SandConfig,
    pub rain: RainConfig,
    pub leaves: LeafConfig,
    pub fish: FishConfig,
    pub paint: PaintConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with. Everything else is
    /// the host's taste.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.sand.particle_size > 0.0) {
            return Err("sand.particle_size must be positive".to_string());
        }
        if self.sand.substeps == 0 {
            return Err("sand.substeps must be at least 1".to_string());
        }
        if !(self.sand.interaction_radius > 0.0) {
            return Err("sand.interaction_radius must be positive".to_string());
        }
        if self.sand.palette.is_empty()
            || self.leaves.palette.is_empty()
            || self.paint.palette.is_empty()
        {
            return Err("palettes must have at least one color".to_string());
        }
        if self.rain.min_drops > self.rain.max_drops {
            return Err("rain.min_drops must not exceed rain.max_drops".to_string());
        }
        Ok(())
    }
}

/// Sand: the grid-indexed repulsion scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SandConfig {
    /// Visual size in px; also the grid cell size.
    pub particle_size: f32,
    /// Particles per px² of canvas.
    pub density: f32,
    pub max_particles: usize,
    /// Per-frame velocity multiplier, < 1.
    pub damping: f32,
    pub interaction_radius: f32,
    pub interaction_strength: f32,
    /// Pointer sweep sub-steps per input event.
    pub substeps: u32,
    pub palette: Vec<Rgb>,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            particle_size: 3.0,
            density: 0.1,
            max_particles: 20_000,
            damping: 0.95,
            interaction_radius: 20.0,
            interaction_strength: 0.1,
            substeps: 20,
            palette: SAND_PALETTE.to_vec(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub min_drops: usize,
    pub max_drops: usize,
    /// Advance of the population sine per 60Hz frame.
    pub oscillation_rate: f32,
    /// Deflection circle around the pointer.
    pub umbrella_radius: f32,
    /// Constant horizontal drift added to every drop.
    pub wind: f32,
    pub splashes_per_hit: usize,
    /// Splash shrink per frame, px.
    pub splash_decay: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            min_drops: 5_000,
            max_drops: 10_000,
            oscillation_rate: 0.01,
            umbrella_radius: 50.0,
            wind: 0.0,
            splashes_per_hit: 3,
            splash_decay: 0.1,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafConfig {
    pub max_leaves: usize,
    pub spawn_interval_ms: f64,
    /// Pointer distance under which a leaf sways away.
    pub push_radius: f32,
    pub push_force: f32,
    /// Relaxation of the sway offset, per frame.
    pub push_decay: f32,
    pub palette: Vec<Rgb>,
}

impl Default for LeafConfig {
    fn default() -> Self {
        Self {
            max_leaves: 100,
            spawn_interval_ms: 200.0,
            push_radius: 100.0,
            push_force: 10.0,
            push_decay: 0.05,
            palette: LEAF_PALETTE.to_vec(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FishConfig {
    pub count: usize,
    /// Pointer distance that spooks the whole school.
    pub flee_radius: f32,
    pub flee_duration_ms: f64,
    pub flee_speed_multiplier: f32,
    /// The closest fish inside this range investigates the pointer.
    pub investigate_radius: f32,
    /// Wander leash around the canvas center.
    pub home_radius: f32,
    pub body_width: f32,
    pub body_height: f32,
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            count: 10,
            flee_radius: 100.0,
            flee_duration_ms: 2_000.0,
            flee_speed_multiplier: 3.0,
            investigate_radius: 300.0,
            home_radius: 150.0,
            body_width: 50.0,
            body_height: 30.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub stream_count: usize,
    pub pointer_radius: f32,
    /// Distortion multiplier while the pointer is pressed / hovering.
    pub press_distortion: f32,
    pub hover_distortion: f32,
    /// Per-frame relaxation of distortion and speed, < 1.
    pub relax: f32,
    pub palette: Vec<Rgb>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            stream_count: 50,
            pointer_radius: 80.0,
            press_distortion: 5.0,
            hover_distortion: 2.0,
            relax: 0.95,
            palette: PAINT_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        EngineConfig::default().validate().expect("defaults must be valid");
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            EngineConfig::from_json(r#"{ "sand": { "damping": 0.9 } }"#).expect("should parse");
        assert_eq!(config.sand.damping, 0.9);
        assert_eq!(config.sand.substeps, 20);
        assert_eq!(config.rain.max_drops, 10_000);
    }

    #[test]
    fn zero_substeps_is_rejected() {
        let err = EngineConfig::from_json(r#"{ "sand": { "substeps": 0 } }"#).unwrap_err();
        assert!(err.contains("substeps"));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(EngineConfig::from_json("{ nope").is_err());
    }
}
