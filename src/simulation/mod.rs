//! Playground world - orchestration only.
//!
//! The world owns the bodies and the drag constraint; the actual physics
//! lives in systems/. Mutation happens in exactly three places: the
//! builder (initialize), the step loop, and the drag controller. Sampling
//! is read-only.

use std::sync::Arc;

use crate::domain::content::BodyCatalog;
use crate::rigid_body::RigidBody;

#[path = "builder/builder.rs"]
mod builder;
#[path = "drag/drag.rs"]
mod drag;
#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/sample.rs"]
mod sample;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use drag::DragConstraint;
pub use facade::Playground;
pub use sample::{BodyPose, PoseSnapshot};
pub use step::FIXED_DT_MS;

/// The simulation world behind the gravity playground.
pub struct PlaygroundCore {
    content: Arc<BodyCatalog>,
    bodies: Vec<RigidBody>,

    // Viewport (set at initialize)
    viewport_w: f32,
    viewport_h: f32,

    // Settings
    gravity_x: f32,
    gravity_y: f32,
    gravity_scale: f32,
    air_damping: f32,
    body_friction: f32,
    body_restitution: f32,
    wall_friction: f32,
    wall_restitution: f32,

    // State
    drag: Option<DragConstraint>,
    frame: u64,
    rng_state: u32,
    initialized: bool,
    running: bool,
    accumulator_ms: f32,

    // Zero-copy render path: [x, y, angle] per dynamic body
    pose_buffer: Vec<f32>,
}

impl PlaygroundCore {
    /// Create a world over the builtin descriptor catalog.
    pub fn new() -> Self {
        init::create_core(Arc::new(BodyCatalog::builtin()))
    }

    pub fn with_catalog(content: Arc<BodyCatalog>) -> Self {
        init::create_core(content)
    }

    /// Replace the catalog from a JSON bundle. Resets the world; call
    /// `initialize` again afterwards.
    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let catalog = BodyCatalog::from_bundle_json(json)?;
        self.content = Arc::new(catalog);
        self.reset();
        Ok(())
    }

    pub fn content_manifest_json(&self) -> String {
        self.content.manifest_json()
    }

    pub fn catalog(&self) -> &BodyCatalog {
        &self.content
    }

    /// Build the world: 3 boundary bodies plus one dynamic body per
    /// descriptor, dropped in from above the viewport. Idempotent once live.
    pub fn initialize(&mut self, viewport_w: f32, viewport_h: f32) -> Result<(), String> {
        builder::initialize(self, viewport_w, viewport_h)
    }

    /// Tear the world down to its pre-initialize state.
    pub fn reset(&mut self) {
        builder::reset(self);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // === RUN STATE ===

    /// Allow stepping. Safe to call repeatedly.
    pub fn start(&mut self) {
        settings::set_running(self, true);
    }

    /// Stop stepping. Idempotent; sampling stays valid afterwards.
    pub fn stop(&mut self) {
        settings::set_running(self, false);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_gravity_scale(&mut self, scale: f32) {
        settings::set_gravity_scale(self, scale);
    }

    pub fn set_air_damping(&mut self, damping: f32) {
        settings::set_air_damping(self, damping);
    }

    /// Default restitution for dynamic bodies built after this call.
    pub fn set_body_restitution(&mut self, restitution: f32) {
        settings::set_body_restitution(self, restitution);
    }

    /// Default friction for dynamic bodies built after this call.
    pub fn set_body_friction(&mut self, friction: f32) {
        settings::set_body_friction(self, friction);
    }

    /// Seed the placement rng; call before `initialize` for reproducible
    /// drop-in order.
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    // === STEP LOOP ===

    /// Advance one tick of `dt_ms` milliseconds.
    pub fn step(&mut self, dt_ms: f32) {
        step::step(self, dt_ms);
    }

    /// Accumulator-driven stepping at a fixed tick, independent of the
    /// caller's cadence.
    pub fn advance(&mut self, elapsed_ms: f32) {
        step::advance(self, elapsed_ms);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === POINTER DRAG ===

    /// Press at world/screen coordinates. Returns true if a body was
    /// grabbed. Ignored while a drag is already active.
    pub fn press_start(&mut self, x: f32, y: f32) -> bool {
        drag::press_start(self, x, y)
    }

    /// Move the drag anchor. No-op without an active drag; never writes
    /// body poses directly.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        drag::pointer_move(self, x, y);
    }

    /// Release the active drag, if any. Safe to call redundantly.
    pub fn release(&mut self) {
        drag::release(self);
    }

    pub fn has_drag(&self) -> bool {
        self.drag.is_some()
    }

    // === SAMPLING ===

    /// Immutable pose snapshot of every dynamic body, in catalog order.
    pub fn sample(&self) -> PoseSnapshot {
        sample::sample(self)
    }

    pub fn sample_json(&self) -> String {
        sample::sample_json(self)
    }

    /// Read one body's pose by descriptor id.
    pub fn query(&self, body_id: &str) -> Option<BodyPose> {
        sample::query(self, body_id)
    }

    /// Refill the pose transfer buffer; returns the f32 count.
    pub fn fill_pose_buffer(&mut self) -> usize {
        sample::fill_pose_buffer(self)
    }

    /// Pointer into the pose transfer buffer (for JS rendering).
    pub fn poses_ptr(&self) -> *const f32 {
        self.pose_buffer.as_ptr()
    }

    pub fn poses_len(&self) -> usize {
        self.pose_buffer.len()
    }

    pub fn pose_buffer_slice(&self) -> &[f32] {
        &self.pose_buffer
    }

    // === COUNTS ===

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_static).count()
    }

    pub(crate) fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }
}

impl Default for PlaygroundCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
