//! Facade tests that run inside an actual wasm environment
//! (`wasm-pack test --node`). Native builds skip this file entirely.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ambienta_engine::Engine;

#[wasm_bindgen_test]
fn engine_constructs_and_ticks() {
    let mut engine = Engine::new(ambienta_engine::scene_rain(), 640.0, 480.0)
        .expect("valid scene id");
    engine.pointer_moved(320.0, 240.0);
    for _ in 0..10 {
        engine.tick(16.667);
    }
    assert_eq!(engine.frame(), 10.0);
    assert!(engine.extract_sprites() > 0);
}

#[wasm_bindgen_test]
fn unknown_scene_id_is_an_error() {
    assert!(Engine::new(200, 640.0, 480.0).is_err());
}

#[wasm_bindgen_test]
fn sprite_pointers_are_non_null_after_extract() {
    let mut engine = Engine::new(ambienta_engine::scene_fish(), 320.0, 240.0)
        .expect("valid scene id");
    engine.tick(16.0);
    let count = engine.extract_sprites();
    assert!(count > 0);
    assert!(!engine.sprite_x_ptr().is_null());
    assert!(!engine.sprite_shape_ptr().is_null());
    assert!(!engine.sprite_color_ptr().is_null());
}

#[wasm_bindgen_test]
fn config_errors_cross_the_boundary_as_strings() {
    let mut engine = Engine::new(ambienta_engine::scene_sand(), 320.0, 240.0)
        .expect("valid scene id");
    let err = engine
        .load_config("{ not json".to_string())
        .expect_err("malformed json must fail");
    assert!(err.as_string().is_some());
}
