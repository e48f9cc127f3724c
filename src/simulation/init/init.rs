use std::sync::Arc;

use crate::domain::content::BodyCatalog;

use super::PlaygroundCore;

pub(super) fn create_core(content: Arc<BodyCatalog>) -> PlaygroundCore {
    PlaygroundCore {
        content,
        bodies: Vec::new(),
        viewport_w: 0.0,
        viewport_h: 0.0,
        // Tuned for the soft drop-in feel; all overridable via settings.
        gravity_x: 0.0,
        gravity_y: 0.8,
        gravity_scale: 0.001,
        air_damping: 0.015,
        body_friction: 0.4,
        body_restitution: 0.5,
        wall_friction: 0.3,
        wall_restitution: 0.6,
        drag: None,
        frame: 0,
        rng_state: 12345,
        initialized: false,
        running: false,
        accumulator_ms: 0.0,
        pose_buffer: Vec::new(),
    }
}
