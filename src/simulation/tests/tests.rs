use std::sync::Arc;

use super::*;
use crate::domain::content::{BodyCatalog, BodyDescriptor, BodyKind};
use crate::rigid_body::Vec2;

const VIEW_W: f32 = 1000.0;
const VIEW_H: f32 = 500.0;
const SETTLE_EPS: f32 = 0.08; // px/ms

fn descriptor(id: &str, kind: BodyKind, width: f32, height: f32) -> BodyDescriptor {
    BodyDescriptor {
        id: id.to_string(),
        kind,
        width,
        height,
        color: None,
        hex: None,
        name: None,
        label: None,
        icon: None,
    }
}

/// 8 swatch cards + 6 pills, the concrete scenario from the design notes.
fn scenario_catalog() -> BodyCatalog {
    let mut bodies = Vec::new();
    for i in 0..8 {
        bodies.push(descriptor(&format!("swatch-{}", i), BodyKind::Card, 160.0, 280.0));
    }
    for i in 0..6 {
        bodies.push(descriptor(&format!("pill-{}", i), BodyKind::Pill, 120.0, 48.0));
    }
    BodyCatalog::from_descriptors(bodies).expect("scenario catalog is valid")
}

fn scenario_core(seed: u32) -> PlaygroundCore {
    let mut core = PlaygroundCore::with_catalog(Arc::new(scenario_catalog()));
    core.set_seed(seed);
    core.initialize(VIEW_W, VIEW_H).expect("initialize");
    core
}

fn step_ms(core: &mut PlaygroundCore, total_ms: f32) {
    let steps = (total_ms / 16.0).ceil() as u32;
    for _ in 0..steps {
        core.step(16.0);
    }
}

#[test]
fn initialize_rejects_bad_viewport() {
    let mut core = scenario_core(7);
    core.reset();
    assert!(core.initialize(0.0, 500.0).is_err());
    assert!(core.initialize(1000.0, -1.0).is_err());
    assert!(core.initialize(1000.0, f32::NAN).is_err());
    assert!(!core.is_initialized());
}

#[test]
fn catalog_rejects_degenerate_descriptors() {
    assert!(BodyCatalog::from_descriptors(Vec::new()).is_err());

    let dup = vec![
        descriptor("a", BodyKind::Pill, 100.0, 48.0),
        descriptor("a", BodyKind::Pill, 100.0, 48.0),
    ];
    assert!(BodyCatalog::from_descriptors(dup).is_err());

    let flat = vec![descriptor("a", BodyKind::Card, 160.0, 0.0)];
    assert!(BodyCatalog::from_descriptors(flat).is_err());
}

#[test]
fn initialize_is_idempotent() {
    let mut core = scenario_core(42);
    let before = core.sample();
    assert!(core.initialize(VIEW_W, VIEW_H).is_ok());
    assert_eq!(core.dynamic_body_count(), 14);
    assert_eq!(core.sample(), before);
}

#[test]
fn bodies_drop_in_from_above_the_viewport() {
    let core = scenario_core(1);
    let snapshot = core.sample();
    assert_eq!(snapshot.poses.len(), 14);
    for pose in &snapshot.poses {
        assert!(pose.y < 0.0, "{} should start above view, got {}", pose.id, pose.y);
        assert!((-750.0..=-150.0).contains(&pose.y), "{} at {}", pose.id, pose.y);
        assert!(pose.angle.abs() <= 0.151, "{} tilted {}", pose.id, pose.angle);
    }
}

#[test]
fn placement_is_reproducible_per_seed() {
    let a = scenario_core(99).sample();
    let b = scenario_core(99).sample();
    assert_eq!(a, b);

    let c = scenario_core(100).sample();
    assert_ne!(a, c);
}

#[test]
fn bodies_settle_within_bounds_after_five_seconds() {
    let mut core = scenario_core(3);
    core.start();
    step_ms(&mut core, 5000.0);

    let mut settled = 0;
    for body in core.bodies().iter().filter(|b| !b.is_static) {
        assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
        assert!(
            (0.0..=VIEW_W).contains(&body.pos.x),
            "body {} escaped horizontally: {}",
            body.id,
            body.pos.x
        );
        let sink = body.lowest_point_y() - VIEW_H;
        assert!(
            sink < 1.5,
            "body {} buried {}px in the floor",
            body.id,
            sink
        );
        if body.velocity.y.abs() < SETTLE_EPS {
            settled += 1;
        }
    }
    let total = core.dynamic_body_count();
    assert!(
        settled * 10 >= total * 9,
        "only {}/{} bodies settled",
        settled,
        total
    );
    // The drop-in effect resolves: everyone ends up in the visible area.
    for pose in &core.sample().poses {
        assert!(pose.y > 0.0, "{} still above view at {}", pose.id, pose.y);
    }
}

#[test]
fn floor_holds_under_extended_stepping() {
    let mut core = scenario_core(8);
    core.start();
    step_ms(&mut core, 10_000.0);
    for body in core.bodies().iter().filter(|b| !b.is_static) {
        assert!(body.lowest_point_y() < VIEW_H + 1.5);
    }
}

/// Pile weight must never press a small body into the floor; the bound is
/// on the lowest vertex, not the centre, so a half-buried body fails.
#[test]
fn floor_supports_the_full_pile_across_seeds() {
    for seed in [1, 3, 5, 8, 11, 14, 17, 20, 23, 26, 28, 30] {
        let mut core = PlaygroundCore::new();
        core.set_seed(seed);
        core.initialize(VIEW_W, VIEW_H).expect("initialize");
        core.start();
        for _ in 0..600 {
            core.step(16.0);
        }
        for body in core.bodies().iter().filter(|b| !b.is_static) {
            let sink = body.lowest_point_y() - VIEW_H;
            assert!(
                sink < 1.5,
                "seed {}: body {} buried {}px in the floor",
                seed,
                body.id,
                sink
            );
            assert!(
                (0.0..=VIEW_W).contains(&body.pos.x),
                "seed {}: body {} escaped horizontally: {}",
                seed,
                body.id,
                body.pos.x
            );
        }
    }
}

#[test]
fn press_on_empty_space_is_a_noop() {
    let mut core = scenario_core(5);
    core.start();
    step_ms(&mut core, 4000.0);

    // Far above the settled pile: nothing to hit.
    assert!(!core.press_start(VIEW_W / 2.0, -2000.0));
    assert!(!core.has_drag());

    // Releasing and moving with no active drag must not panic.
    core.release();
    core.pointer_move(10.0, 10.0);
}

#[test]
fn only_one_drag_constraint_at_a_time() {
    let mut core = scenario_core(5);
    core.start();
    step_ms(&mut core, 4000.0);

    let snapshot = core.sample();
    let first = &snapshot.poses[0];
    let second = &snapshot.poses[7];

    assert!(core.press_start(first.x, first.y));
    assert!(core.has_drag());

    // Second simultaneous press is ignored, even over another body.
    assert!(!core.press_start(second.x, second.y));
    assert!(core.has_drag());

    core.release();
    assert!(!core.has_drag());
    core.release(); // redundant release is fine
}

#[test]
fn dragged_body_follows_the_pointer_and_is_freed_on_release() {
    let mut core = scenario_core(11);
    core.start();
    step_ms(&mut core, 5000.0);

    // Grab the left-most body so there is room to pull it right.
    let snapshot = core.sample();
    let target = snapshot
        .poses
        .iter()
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .expect("bodies exist")
        .clone();

    assert!(core.press_start(target.x, target.y));

    // Pull 200px to the right over 10 pointer frames.
    for i in 1..=10 {
        core.pointer_move(target.x + 20.0 * (i as f32), target.y);
        step_ms(&mut core, 48.0);
    }
    core.release();
    assert!(!core.has_drag());

    let dragged = core.query(&target.id).expect("body still exists");
    assert!(
        dragged.x > target.x + 50.0,
        "drag moved {} from {} only to {}",
        target.id,
        target.x,
        dragged.x
    );

    // Free again: keeps simulating under gravity and stays in bounds.
    step_ms(&mut core, 3000.0);
    let rested = core.query(&target.id).expect("body still exists");
    assert!((0.0..=VIEW_W).contains(&rested.x));
    assert!(rested.y > 0.0 && rested.y < VIEW_H);
}

#[test]
fn teardown_is_idempotent_and_freezes_poses() {
    let mut core = scenario_core(2);
    core.start();
    step_ms(&mut core, 500.0);

    core.stop();
    let frame = core.frame();
    let frozen = core.sample();

    core.step(16.0);
    core.advance(160.0);
    assert_eq!(core.frame(), frame);
    assert_eq!(core.sample(), frozen);

    core.stop(); // second stop is a safe no-op
    assert!(!core.is_running());

    core.start();
    core.step(16.0);
    assert_eq!(core.frame(), frame + 1);
}

#[test]
fn stepping_without_start_does_nothing() {
    let mut core = scenario_core(2);
    let before = core.sample();
    core.step(16.0);
    core.advance(160.0);
    assert_eq!(core.sample(), before);
    assert_eq!(core.frame(), 0);
}

#[test]
fn snapshots_are_independent_values() {
    let core = scenario_core(6);
    let mut first = core.sample();
    let second = core.sample();
    assert_eq!(first, second);

    // Mutating a handed-out snapshot cannot leak back into the world.
    first.poses[0].x += 1000.0;
    assert_eq!(core.sample(), second);
}

#[test]
fn query_matches_snapshot_and_tolerates_unknown_ids() {
    let core = scenario_core(4);
    let snapshot = core.sample();
    let pose = core.query("swatch-0").expect("known body");
    assert_eq!(&pose, &snapshot.poses[0]);
    assert!(core.query("no-such-body").is_none());
}

#[test]
fn advance_runs_fixed_ticks_and_caps_backlog() {
    let mut core = scenario_core(12);
    core.start();

    core.advance(35.0); // two 16.67ms ticks, remainder carried
    assert_eq!(core.frame(), 2);

    core.advance(60_000.0); // a huge frame gap must not spiral
    assert!(core.frame() <= 2 + 5);
}

#[test]
fn escaped_body_is_recovered_on_the_next_step() {
    let mut core = scenario_core(9);
    core.start();

    // Force a tunneling outcome by hand.
    let index = core
        .bodies
        .iter()
        .position(|b| !b.is_static)
        .expect("dynamic body");
    core.bodies[index].pos = Vec2::new(VIEW_W / 2.0, VIEW_H + 400.0);
    core.bodies[index].velocity = Vec2::new(0.0, 3.0);

    core.step(16.0);

    let body = &core.bodies[index];
    assert!(body.pos.y < VIEW_H);
    assert_eq!(body.velocity, Vec2::zero());
}

#[test]
fn pose_buffer_carries_triples_in_catalog_order() {
    let mut core = scenario_core(13);
    let len = core.fill_pose_buffer();
    assert_eq!(len, 14 * 3);

    let snapshot = core.sample();
    let buffer = core.pose_buffer_slice();
    for (i, pose) in snapshot.poses.iter().enumerate() {
        assert_eq!(buffer[i * 3], pose.x);
        assert_eq!(buffer[i * 3 + 1], pose.y);
        assert_eq!(buffer[i * 3 + 2], pose.angle);
    }
}

#[test]
fn sample_json_is_well_formed() {
    let core = scenario_core(14);
    let json = core.sample_json();
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["poses"].as_array().map(|a| a.len()), Some(14));
    assert!(value["poses"][0]["id"].is_string());
    assert!(value["poses"][0]["angle"].is_number());
}

#[test]
fn load_content_bundle_replaces_catalog_and_resets() {
    let mut core = scenario_core(15);
    let json = r#"{
        "bodies": [
            {"id": "pill-solo", "kind": "pill", "width": 120.0, "height": 48.0, "label": "Solo"}
        ]
    }"#;
    core.load_content_bundle_json(json).expect("bundle parses");
    assert!(!core.is_initialized());

    core.initialize(VIEW_W, VIEW_H).expect("re-initialize");
    assert_eq!(core.dynamic_body_count(), 1);
    assert_eq!(core.sample().poses[0].id, "pill-solo");

    // Malformed bundles are rejected outright.
    assert!(core.load_content_bundle_json("{\"bodies\": []}").is_err());
    assert!(core.load_content_bundle_json("not json").is_err());
}
