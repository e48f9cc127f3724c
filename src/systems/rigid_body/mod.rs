mod body;
mod shape;
mod vec2;

pub use body::RigidBody;
pub use shape::chamfered_rect_vertices;
pub use vec2::Vec2;
