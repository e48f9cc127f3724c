use crate::rigid_body::Vec2;

use super::PlaygroundCore;

/// Fraction of the pointer gap closed per tick.
const DRAG_STIFFNESS: f32 = 0.1;
/// Fraction of the attach point's velocity removed per tick.
const DRAG_DAMPING: f32 = 0.3;

/// Transient spring between the pointer and a grabbed body.
///
/// The anchor tracks the pointer; the body is pulled by impulses, never
/// repositioned, so it keeps colliding plausibly with its neighbours
/// while dragged. At most one exists at a time.
pub struct DragConstraint {
    pub body_index: usize,
    /// Grab point in the body's local frame
    pub local_offset: Vec2,
    /// Pointer-tracked world point
    pub anchor: Vec2,
    pub stiffness: f32,
    pub damping: f32,
}

pub(super) fn press_start(core: &mut PlaygroundCore, x: f32, y: f32) -> bool {
    // Single-pointer model: a second press while dragging is ignored.
    if core.drag.is_some() || !core.initialized {
        return false;
    }

    let point = Vec2::new(x, y);
    for (index, body) in core.bodies.iter().enumerate() {
        if body.is_static {
            continue;
        }
        if body.contains_point(point) {
            core.drag = Some(DragConstraint {
                body_index: index,
                local_offset: body.local_point(point),
                anchor: point,
                stiffness: DRAG_STIFFNESS,
                damping: DRAG_DAMPING,
            });
            return true;
        }
    }
    // Press on empty space is a normal no-op.
    false
}

pub(super) fn pointer_move(core: &mut PlaygroundCore, x: f32, y: f32) {
    if let Some(drag) = core.drag.as_mut() {
        drag.anchor = Vec2::new(x, y);
    }
}

pub(super) fn release(core: &mut PlaygroundCore) {
    core.drag = None;
}

/// Spring step: pull the attach point towards the anchor and damp its
/// current velocity. Applied as an impulse at the attach point so the
/// body also picks up realistic spin.
pub(super) fn apply(core: &mut PlaygroundCore, dt_ms: f32) {
    let Some(drag) = core.drag.as_ref() else {
        return;
    };
    let body = &mut core.bodies[drag.body_index];

    let attach = body.world_point(drag.local_offset);
    let gap = drag.anchor - attach;
    let point_vel = body.velocity_at(attach);

    // Desired change in point velocity this tick.
    let delta_v = gap * (drag.stiffness / dt_ms.max(1.0)) - point_vel * drag.damping;
    let dir = delta_v.normalize();
    if dir.length_squared() < 1e-6 {
        return;
    }

    // Effective mass along the impulse direction.
    let r = attach - body.pos;
    let r_cross = r.cross(dir);
    let inv_mass = body.inv_mass + r_cross * r_cross * body.inv_inertia;
    if inv_mass <= 0.0 {
        return;
    }

    let impulse = dir * (delta_v.length() / inv_mass);
    body.apply_impulse_at(attach, impulse);
}
