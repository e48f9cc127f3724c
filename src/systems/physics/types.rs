use crate::rigid_body::Vec2;

/// A single contact between two bodies, produced by the SAT pass.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Index of the first body (always < `b`)
    pub a: usize,
    /// Index of the second body
    pub b: usize,
    /// Contact point in world space
    pub point: Vec2,
    /// Collision normal, oriented from `a` towards `b`
    pub normal: Vec2,
    /// Penetration depth along the normal
    pub depth: f32,
}
