use crate::physics::{collide, correct_positions, resolve_contact, Contact};
use crate::rigid_body::Vec2;

use super::{drag, PlaygroundCore};

/// Fixed simulation tick (60 Hz), in milliseconds.
pub const FIXED_DT_MS: f32 = 1000.0 / 60.0;

/// Backlog cap for the accumulator; beyond this the remainder is dropped
/// rather than spiralling after a long frame.
const MAX_STEPS_PER_ADVANCE: u32 = 5;

/// Speed clamp (px/ms). Keeps cost bounded and prevents tunneling; the
/// drag spring already bounds velocities in normal use.
const MAX_SPEED: f32 = 2.5;
const MAX_SPIN: f32 = 0.02;

const SOLVER_ITERATIONS: usize = 8;
const CORRECTION_ITERATIONS: usize = 2;

/// How far past a side wall a body must tunnel before the escape recovery
/// pulls it back (px).
const ESCAPE_MARGIN: f32 = 150.0;

/// Depth a body's lowest vertex may sink past the floor surface before
/// the hard clamp lifts it out (px).
const FLOOR_SINK_TOLERANCE: f32 = 1.0;

pub(super) fn advance(core: &mut PlaygroundCore, elapsed_ms: f32) {
    if !core.initialized || !core.running || !(elapsed_ms > 0.0) {
        return;
    }

    core.accumulator_ms += elapsed_ms;
    let backlog_cap = FIXED_DT_MS * (MAX_STEPS_PER_ADVANCE as f32);
    if core.accumulator_ms > backlog_cap {
        core.accumulator_ms = backlog_cap;
    }

    while core.accumulator_ms >= FIXED_DT_MS {
        step(core, FIXED_DT_MS);
        core.accumulator_ms -= FIXED_DT_MS;
    }
}

pub(super) fn step(core: &mut PlaygroundCore, dt_ms: f32) {
    if !core.initialized || !core.running || !(dt_ms > 0.0) {
        return;
    }

    // Forces: gravity, then air drag, then the velocity clamp.
    let ax = core.gravity_x * core.gravity_scale;
    let ay = core.gravity_y * core.gravity_scale;
    let damping = 1.0 - core.air_damping;
    for body in core.bodies.iter_mut() {
        if body.is_static {
            continue;
        }
        body.velocity.x += ax * dt_ms;
        body.velocity.y += ay * dt_ms;
        body.velocity = body.velocity * damping;
        body.angular_vel *= damping;

        let speed = body.velocity.length();
        if speed > MAX_SPEED {
            body.velocity = body.velocity * (MAX_SPEED / speed);
        }
        body.angular_vel = body.angular_vel.clamp(-MAX_SPIN, MAX_SPIN);
    }

    // Pointer spring, if a drag is active.
    drag::apply(core, dt_ms);

    // Contacts at current poses, then iterative impulse resolution.
    let contacts = collect_contacts(core);
    for _ in 0..SOLVER_ITERATIONS {
        for contact in &contacts {
            resolve_contact(&mut core.bodies, contact);
        }
    }

    // Integrate poses.
    for body in core.bodies.iter_mut() {
        if body.is_static {
            continue;
        }
        body.pos = body.pos + body.velocity * dt_ms;
        body.angle += body.angular_vel * dt_ms;
    }

    // Remove residual overlap against the post-integration geometry.
    // Depths measured before integration understate what a settling pile
    // presses into the floor, so the correction passes get fresh contacts.
    let contacts = collect_contacts(core);
    for _ in 0..CORRECTION_ITERATIONS {
        for contact in &contacts {
            correct_positions(&mut core.bodies, contact);
        }
    }

    recover_escaped(core);

    core.frame += 1;
}

/// Brute-force pair scan; N is tens of bodies so this stays cheap.
fn collect_contacts(core: &PlaygroundCore) -> Vec<Contact> {
    let bodies = core.bodies();
    let n = bodies.len();
    let mut contacts = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if bodies[i].is_static && bodies[j].is_static {
                continue;
            }
            if let Some(contact) = collide(&bodies[i], &bodies[j], i, j) {
                contacts.push(contact);
            }
        }
    }
    contacts
}

/// Defensive recovery: a body that tunnelled past a side wall is clamped
/// back inside and stopped; a body whose lowest vertex sank past the floor
/// surface is lifted flush with it, so pile weight can never bury a small
/// body at rest. Negative y is fine, there is no ceiling.
fn recover_escaped(core: &mut PlaygroundCore) {
    let w = core.viewport_w;
    let h = core.viewport_h;
    for body in core.bodies.iter_mut() {
        if body.is_static {
            continue;
        }

        if body.pos.x < -ESCAPE_MARGIN {
            body.pos.x = body.half_width;
            body.velocity = Vec2::zero();
            body.angular_vel = 0.0;
        } else if body.pos.x > w + ESCAPE_MARGIN {
            body.pos.x = w - body.half_width;
            body.velocity = Vec2::zero();
            body.angular_vel = 0.0;
        }

        let sink = body.lowest_point_y() - h;
        if sink > FLOOR_SINK_TOLERANCE {
            body.pos.y -= sink;
            body.velocity.y = body.velocity.y.min(0.0);
        }
    }
}
