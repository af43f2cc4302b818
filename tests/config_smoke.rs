//! Config round trips through the public surface: load JSON, watch the
//! running engine pick it up.

use ambienta_engine::simulation::EngineCore;
use ambienta_engine::{EngineConfig, SceneKind};

#[test]
fn default_config_serializes_and_reloads() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).expect("defaults serialize");
    let reparsed = EngineConfig::from_json(&json).expect("serialized defaults parse");
    assert_eq!(reparsed.sand.substeps, config.sand.substeps);
    assert_eq!(reparsed.fish.count, config.fish.count);
}

#[test]
fn reload_resizes_populations() {
    let mut core = EngineCore::new(SceneKind::Fish, 800.0, 600.0);
    assert_eq!(core.population(), 10);

    core.load_config_json(r#"{ "fish": { "count": 4 } }"#)
        .expect("partial override parses");
    assert_eq!(core.population(), 4);

    for _ in 0..60 {
        core.tick(16.0);
    }
    assert_eq!(core.population(), 4);
}

#[test]
fn sand_density_override_caps_at_max() {
    let mut core = EngineCore::new(SceneKind::Sand, 1_000.0, 1_000.0);
    core.load_config_json(r#"{ "sand": { "density": 1.0, "max_particles": 500 } }"#)
        .expect("override parses");
    assert_eq!(core.population(), 500);
}

#[test]
fn invalid_values_roll_back() {
    let mut core = EngineCore::new(SceneKind::Sand, 400.0, 400.0);
    let before = core.population();

    let err = core
        .load_config_json(r#"{ "sand": { "particle_size": 0 } }"#)
        .unwrap_err();
    assert!(err.contains("particle_size"));
    assert_eq!(core.population(), before);

    let err = core
        .load_config_json(r#"{ "rain": { "min_drops": 10, "max_drops": 5 } }"#)
        .unwrap_err();
    assert!(err.contains("min_drops"));
}
