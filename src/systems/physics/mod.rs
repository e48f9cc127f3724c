mod collision;
mod solver;
mod types;

pub use collision::collide;
pub use solver::{correct_positions, resolve_contact};
pub use types::Contact;
