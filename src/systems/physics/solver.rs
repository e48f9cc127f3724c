use crate::rigid_body::RigidBody;

use super::types::Contact;

/// Approach speeds below this (px/ms) collide without bounce, so stacks
/// come to rest instead of micro-bouncing forever.
const RESTITUTION_THRESHOLD: f32 = 0.08;

/// Penetration allowed before positional correction kicks in (px).
const PENETRATION_SLOP: f32 = 0.5;
/// Fraction of the remaining penetration removed per correction pass.
const CORRECTION_PERCENT: f32 = 0.4;

/// Resolve one contact with a normal impulse (restitution-aware) and a
/// Coulomb friction impulse clamped against it.
pub fn resolve_contact(bodies: &mut [RigidBody], c: &Contact) {
    let (a, b) = body_pair(bodies, c.a, c.b);

    let ra = c.point - a.pos;
    let rb = c.point - b.pos;

    let rel_vel = b.velocity_at(c.point) - a.velocity_at(c.point);
    let vel_along_normal = rel_vel.dot(c.normal);
    if vel_along_normal > 0.0 {
        return; // already separating
    }

    let ra_n = ra.cross(c.normal);
    let rb_n = rb.cross(c.normal);
    let inv_mass_sum =
        a.inv_mass + b.inv_mass + ra_n * ra_n * a.inv_inertia + rb_n * rb_n * b.inv_inertia;
    if inv_mass_sum <= 0.0 {
        return; // two statics
    }

    let mut restitution = a.restitution.min(b.restitution);
    if -vel_along_normal < RESTITUTION_THRESHOLD {
        restitution = 0.0;
    }

    let jn = -(1.0 + restitution) * vel_along_normal / inv_mass_sum;
    let normal_impulse = c.normal * jn;
    a.apply_impulse_at(c.point, -normal_impulse);
    b.apply_impulse_at(c.point, normal_impulse);

    // Friction along the contact tangent.
    let rel_vel = b.velocity_at(c.point) - a.velocity_at(c.point);
    let tangent = (rel_vel - c.normal * rel_vel.dot(c.normal)).normalize();
    if tangent.length_squared() < 1e-6 {
        return;
    }

    let ra_t = ra.cross(tangent);
    let rb_t = rb.cross(tangent);
    let inv_mass_tangent =
        a.inv_mass + b.inv_mass + ra_t * ra_t * a.inv_inertia + rb_t * rb_t * b.inv_inertia;
    if inv_mass_tangent <= 0.0 {
        return;
    }

    let mu = (a.friction * b.friction).sqrt();
    let jt = (-rel_vel.dot(tangent) / inv_mass_tangent).clamp(-mu * jn, mu * jn);
    let friction_impulse = tangent * jt;
    a.apply_impulse_at(c.point, -friction_impulse);
    b.apply_impulse_at(c.point, friction_impulse);
}

/// Push overlapping bodies apart along the contact normal, split by
/// inverse mass (Baumgarte-style, with slop).
pub fn correct_positions(bodies: &mut [RigidBody], c: &Contact) {
    let (a, b) = body_pair(bodies, c.a, c.b);

    let total_inv_mass = a.inv_mass + b.inv_mass;
    if total_inv_mass <= 0.0 {
        return;
    }

    let depth = (c.depth - PENETRATION_SLOP).max(0.0);
    if depth <= 0.0 {
        return;
    }

    let correction = c.normal * (CORRECTION_PERCENT * depth / total_inv_mass);
    a.pos = a.pos - correction * a.inv_mass;
    b.pos = b.pos + correction * b.inv_mass;
}

/// Borrow two distinct bodies mutably. Contacts always carry `a < b`.
fn body_pair(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i < j);
    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
