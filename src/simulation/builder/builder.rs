use crate::rigid_body::{RigidBody, Vec2};

use super::random::rand_unit;
use super::PlaygroundCore;

/// Walls are thick so nothing tunnels through at playground speeds.
const WALL_THICKNESS: f32 = 100.0;
/// Columns the drop-in scatter is distributed over.
const COLUMNS: usize = 7;
/// Horizontal scatter margin on each side of the viewport.
const EDGE_MARGIN: f32 = 100.0;

pub(super) fn initialize(
    core: &mut PlaygroundCore,
    viewport_w: f32,
    viewport_h: f32,
) -> Result<(), String> {
    if core.initialized {
        return Ok(());
    }

    if !(viewport_w > 0.0) || !(viewport_h > 0.0) {
        return Err(format!(
            "viewport dimensions must be positive: {}x{}",
            viewport_w, viewport_h
        ));
    }
    if core.content.is_empty() {
        return Err("body catalog is empty".to_string());
    }
    for d in core.content.descriptors() {
        if !(d.width > 0.0) || !(d.height > 0.0) {
            return Err(format!(
                "body {} has non-positive dimensions: {}x{}",
                d.id, d.width, d.height
            ));
        }
    }

    core.viewport_w = viewport_w;
    core.viewport_h = viewport_h;
    core.bodies = Vec::with_capacity(core.content.len() + 3);

    // Boundaries: floor, left wall, right wall. Deliberately NO ceiling,
    // so bodies enter by falling from above the visible area. The side
    // walls extend far above the viewport to contain the drop zone.
    let walls = [
        (
            Vec2::new(viewport_w / 2.0, viewport_h + WALL_THICKNESS / 2.0),
            viewport_w * 2.0,
            WALL_THICKNESS,
        ),
        (
            Vec2::new(-WALL_THICKNESS / 2.0, 0.0),
            WALL_THICKNESS,
            viewport_h * 6.0,
        ),
        (
            Vec2::new(viewport_w + WALL_THICKNESS / 2.0, 0.0),
            WALL_THICKNESS,
            viewport_h * 6.0,
        ),
    ];

    let mut next_id: u32 = 1;
    for (pos, w, h) in walls {
        core.bodies.push(RigidBody::new_static(
            next_id,
            pos,
            w,
            h,
            core.wall_friction,
            core.wall_restitution,
        ));
        next_id += 1;
    }

    // Scatter bodies above the viewport across fixed columns with random
    // jitter, start height and tilt. The wide random height range is what
    // makes them arrive in mixed, non-sequential order.
    let span = viewport_w - 2.0 * EDGE_MARGIN;
    let descriptor_count = core.content.len();
    for i in 0..descriptor_count {
        let d = &core.content.descriptors()[i];
        let col = i % COLUMNS;
        let x = EDGE_MARGIN
            + (col as f32) * span / ((COLUMNS - 1) as f32)
            + (rand_unit(&mut core.rng_state) - 0.5) * 60.0;
        let y = -150.0 - rand_unit(&mut core.rng_state) * 600.0;
        let angle = (rand_unit(&mut core.rng_state) - 0.5) * 0.3;

        let radius = d.kind.corner_radius(d.height);
        core.bodies.push(RigidBody::new_dynamic(
            next_id,
            i,
            Vec2::new(x, y),
            angle,
            d.width,
            d.height,
            radius,
            core.body_friction,
            core.body_restitution,
        ));
        next_id += 1;
    }

    core.drag = None;
    core.frame = 0;
    core.accumulator_ms = 0.0;
    core.initialized = true;
    Ok(())
}

pub(super) fn reset(core: &mut PlaygroundCore) {
    core.bodies.clear();
    core.pose_buffer.clear();
    core.drag = None;
    core.frame = 0;
    core.accumulator_ms = 0.0;
    core.initialized = false;
    core.running = false;
}
