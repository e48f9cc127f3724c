use super::shape::chamfered_rect_vertices;
use super::vec2::Vec2;

/// Matter-style default density (mass per square pixel).
const DENSITY: f32 = 0.001;

/// Rigid body - a chamfered rectangle that moves as a single unit.
///
/// Shape dimensions never change after creation; only pose and velocity
/// mutate. Boundary walls are the same type with zero inverse mass.
pub struct RigidBody {
    // === Physics State ===
    /// World position (centre of mass)
    pub pos: Vec2,
    /// Velocity vector (pixels per millisecond)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per millisecond)
    pub angular_vel: f32,
    /// 1/mass; 0 for static bodies
    pub inv_mass: f32,
    /// 1/moment of inertia; 0 for static bodies
    pub inv_inertia: f32,
    pub is_static: bool,
    /// Unique ID for this body
    pub id: u32,
    /// Index into the descriptor catalog; `None` for boundary bodies
    pub descriptor_index: Option<usize>,

    // === Material properties ===
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,

    // === Shape Definition ===
    /// Vertex ring relative to the centre of mass
    local_verts: Vec<Vec2>,
    pub half_width: f32,
    pub half_height: f32,
    /// Circumscribed radius, used as the hit-test/broad-phase pre-filter
    pub bound_radius: f32,
}

impl RigidBody {
    /// Create a dynamic chamfered-rectangle body.
    #[allow(clippy::too_many_arguments)]
    pub fn new_dynamic(
        id: u32,
        descriptor_index: usize,
        pos: Vec2,
        angle: f32,
        width: f32,
        height: f32,
        corner_radius: f32,
        friction: f32,
        restitution: f32,
    ) -> Self {
        let mass = width * height * DENSITY;
        // Rectangle inertia; the chamfer shaves off a negligible amount.
        let inertia = mass * (width * width + height * height) / 12.0;
        let hw = width / 2.0;
        let hh = height / 2.0;

        Self {
            pos,
            velocity: Vec2::zero(),
            angle,
            angular_vel: 0.0,
            inv_mass: 1.0 / mass,
            inv_inertia: 1.0 / inertia,
            is_static: false,
            id,
            descriptor_index: Some(descriptor_index),
            friction,
            restitution: restitution.clamp(0.0, 1.0),
            local_verts: chamfered_rect_vertices(width, height, corner_radius),
            half_width: hw,
            half_height: hh,
            bound_radius: (hw * hw + hh * hh).sqrt(),
        }
    }

    /// Create a static boundary rectangle (wall or floor).
    pub fn new_static(
        id: u32,
        pos: Vec2,
        width: f32,
        height: f32,
        friction: f32,
        restitution: f32,
    ) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            pos,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            inv_mass: 0.0,
            inv_inertia: 0.0,
            is_static: true,
            id,
            descriptor_index: None,
            friction,
            restitution: restitution.clamp(0.0, 1.0),
            local_verts: chamfered_rect_vertices(width, height, 0.0),
            half_width: hw,
            half_height: hh,
            bound_radius: (hw * hw + hh * hh).sqrt(),
        }
    }

    /// Transform a local point into world space.
    #[inline]
    pub fn world_point(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotate(self.angle)
    }

    /// Transform a world point into the body's local frame.
    #[inline]
    pub fn local_point(&self, world: Vec2) -> Vec2 {
        (world - self.pos).rotate(-self.angle)
    }

    /// Current vertex ring in world space.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.local_verts
            .iter()
            .map(|v| self.world_point(*v))
            .collect()
    }

    /// Velocity of a world-space point on the body.
    #[inline]
    pub fn velocity_at(&self, point: Vec2) -> Vec2 {
        let r = point - self.pos;
        self.velocity + r.perp() * self.angular_vel
    }

    /// Apply an impulse at a world-space point, updating linear and
    /// angular velocity.
    pub fn apply_impulse_at(&mut self, point: Vec2, impulse: Vec2) {
        self.velocity = self.velocity + impulse * self.inv_mass;
        let r = point - self.pos;
        self.angular_vel += r.cross(impulse) * self.inv_inertia;
    }

    /// World-space y of the body's lowest vertex (screen y grows down).
    /// This is the support point against the floor.
    pub fn lowest_point_y(&self) -> f32 {
        self.local_verts
            .iter()
            .map(|v| self.world_point(*v).y)
            .fold(f32::MIN, f32::max)
    }

    /// Exact point containment: circumradius pre-filter, then an
    /// even-odd crossing test on the vertex ring.
    pub fn contains_point(&self, p: Vec2) -> bool {
        if (p - self.pos).length_squared() > self.bound_radius * self.bound_radius {
            return false;
        }

        let verts = self.world_vertices();
        let n = verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = verts[i];
            let vj = verts[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
