use super::vec2::Vec2;

/// Segments used to approximate each rounded corner.
const CORNER_SEGMENTS: u32 = 4;

/// Build the vertex ring of a `width` x `height` rectangle with rounded
/// corners of the given radius, centred on the origin.
///
/// A zero (or negative) radius yields the plain 4-vertex rectangle. The
/// radius is clamped so opposite corners never overlap; a pill shape
/// (radius = height/2) degenerates the short edges away, which is fine for
/// SAT since consecutive duplicate vertices only produce zero-length edges
/// that are skipped by normalization.
pub fn chamfered_rect_vertices(width: f32, height: f32, radius: f32) -> Vec<Vec2> {
    let hw = width / 2.0;
    let hh = height / 2.0;

    if radius <= 0.0 {
        return vec![
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
        ];
    }

    let r = radius.min(hw).min(hh);

    // Corner arc centres, ordered so the ring walks each quadrant in turn.
    // Screen coordinates (y down); the solver is winding-agnostic.
    let corners = [
        (Vec2::new(hw - r, hh - r), 0.0_f32),
        (Vec2::new(-(hw - r), hh - r), std::f32::consts::FRAC_PI_2),
        (Vec2::new(-(hw - r), -(hh - r)), std::f32::consts::PI),
        (Vec2::new(hw - r, -(hh - r)), 3.0 * std::f32::consts::FRAC_PI_2),
    ];

    let mut verts = Vec::with_capacity((CORNER_SEGMENTS as usize + 1) * 4);
    for (centre, start) in corners {
        for s in 0..=CORNER_SEGMENTS {
            let a = start + std::f32::consts::FRAC_PI_2 * (s as f32) / (CORNER_SEGMENTS as f32);
            verts.push(centre + Vec2::new(a.cos(), a.sin()) * r);
        }
    }
    verts
}
