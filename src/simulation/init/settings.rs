use super::PlaygroundCore;

pub(super) fn set_running(core: &mut PlaygroundCore, running: bool) {
    core.running = running;
    if !running {
        core.accumulator_ms = 0.0;
    }
}

pub(super) fn set_gravity(core: &mut PlaygroundCore, x: f32, y: f32) {
    core.gravity_x = x;
    core.gravity_y = y;
}

pub(super) fn set_gravity_scale(core: &mut PlaygroundCore, scale: f32) {
    core.gravity_scale = scale;
}

pub(super) fn set_air_damping(core: &mut PlaygroundCore, damping: f32) {
    core.air_damping = damping.clamp(0.0, 1.0);
}

pub(super) fn set_body_restitution(core: &mut PlaygroundCore, restitution: f32) {
    core.body_restitution = restitution.clamp(0.0, 1.0);
}

pub(super) fn set_body_friction(core: &mut PlaygroundCore, friction: f32) {
    core.body_friction = friction.max(0.0);
}

pub(super) fn set_seed(core: &mut PlaygroundCore, seed: u32) {
    // xorshift sticks at zero
    core.rng_state = if seed == 0 { 0x9E37_79B9 } else { seed };
}
