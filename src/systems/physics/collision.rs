use crate::rigid_body::{RigidBody, Vec2};

use super::types::Contact;

/// Test two convex bodies with the Separating Axis Theorem.
///
/// Returns the minimum-translation contact, normal oriented from `a`
/// towards `b`, or `None` when a separating axis exists. `ia`/`ib` are the
/// caller's body indices, carried through for the solver.
pub fn collide(a: &RigidBody, b: &RigidBody, ia: usize, ib: usize) -> Option<Contact> {
    // Broad phase: circumscribed circles.
    let gap = b.pos - a.pos;
    let reach = a.bound_radius + b.bound_radius;
    if gap.length_squared() > reach * reach {
        return None;
    }

    let verts_a = a.world_vertices();
    let verts_b = b.world_vertices();

    let mut depth = f32::MAX;
    let mut normal = Vec2::zero();

    let (d, n) = test_axes(&verts_a, &verts_b)?;
    if d < depth {
        depth = d;
        normal = n;
    }
    let (d, n) = test_axes(&verts_b, &verts_a)?;
    if d < depth {
        depth = d;
        normal = n;
    }

    // Orient the normal from a to b.
    if gap.dot(normal) < 0.0 {
        normal = -normal;
    }

    // Contact point: the vertex of b pushed deepest into a.
    let mut point = verts_b[0];
    let mut deepest = point.dot(normal);
    for v in verts_b.iter().skip(1) {
        let d = v.dot(normal);
        if d < deepest {
            deepest = d;
            point = *v;
        }
    }

    Some(Contact {
        a: ia,
        b: ib,
        point,
        normal,
        depth,
    })
}

/// Test every edge normal of `poly` as a separating axis against `other`.
/// Returns the minimum overlap and its axis, or `None` on separation.
fn test_axes(poly: &[Vec2], other: &[Vec2]) -> Option<(f32, Vec2)> {
    let n = poly.len();
    let mut min_depth = f32::MAX;
    let mut best_normal = Vec2::zero();

    for i in 0..n {
        let edge = poly[(i + 1) % n] - poly[i];
        if edge.length_squared() < 1e-8 {
            // Degenerate edge from a fully-rounded (pill) corner join.
            continue;
        }
        let axis = Vec2::new(edge.y, -edge.x).normalize();

        let (min_a, max_a) = project(poly, axis);
        let (min_b, max_b) = project(other, axis);

        if max_a < min_b || max_b < min_a {
            return None;
        }

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < min_depth {
            min_depth = overlap;
            best_normal = axis;
        }
    }

    Some((min_depth, best_normal))
}

/// Project a vertex ring onto an axis, returning (min, max).
fn project(verts: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = verts[0].dot(axis);
    let mut max = min;
    for v in verts.iter().skip(1) {
        let p = v.dot(axis);
        if p < min {
            min = p;
        }
        if p > max {
            max = p;
        }
    }
    (min, max)
}
