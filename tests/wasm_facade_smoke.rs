#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use playground_engine::Playground;

#[wasm_bindgen_test]
fn facade_lifecycle_smoke() {
    let mut playground = Playground::new();
    playground.initialize(800.0, 400.0).expect("initialize");
    assert!(playground.initialized());

    playground.start();
    playground.advance(100.0);
    assert!(playground.frame() > 0);

    let json = playground.sample_json();
    assert!(json.contains("poses"));

    let poses = playground.sample_poses();
    assert_eq!(poses.length() as usize, playground.poses_len());

    playground.stop();
    assert!(!playground.running());
}
