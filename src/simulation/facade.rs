use wasm_bindgen::prelude::*;

use super::PlaygroundCore;

/// wasm facade over [`PlaygroundCore`].
///
/// The hosting page constructs one per sandbox instance, calls
/// `initialize` when the section first becomes visible, forwards pointer
/// events, drives `advance` from its own timer and reads poses once per
/// animation frame. Visibility observation and DOM writes stay host-side.
#[wasm_bindgen]
pub struct Playground {
    core: PlaygroundCore,
}

#[wasm_bindgen]
impl Playground {
    /// Create a playground over the builtin body catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: PlaygroundCore::new(),
        }
    }

    /// Build the world for the given viewport. Idempotent once live.
    pub fn initialize(&mut self, viewport_w: f32, viewport_h: f32) -> Result<(), JsValue> {
        self.core
            .initialize(viewport_w, viewport_h)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Replace the body catalog from a JSON bundle; resets the world.
    pub fn load_content_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_content_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Catalog manifest the page builds its visual elements from.
    pub fn get_content_manifest_json(&self) -> String {
        self.core.content_manifest_json()
    }

    /// Tear the world down; `initialize` may be called again afterwards.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === RUN STATE ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.core.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn initialized(&self) -> bool {
        self.core.is_initialized()
    }

    // === STEP LOOP ===

    /// Advance the simulation by wall-clock milliseconds (fixed internal
    /// tick, accumulator-driven).
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.core.advance(elapsed_ms);
    }

    /// Advance exactly one tick of `dt_ms`.
    pub fn step(&mut self, dt_ms: f32) {
        self.core.step(dt_ms);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    // === POINTER DRAG ===

    /// Returns true if a body was grabbed (the host switches the cursor).
    pub fn press_start(&mut self, x: f32, y: f32) -> bool {
        self.core.press_start(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    /// Call for pointer-up, pointer-leave and touch-end/cancel alike.
    pub fn release(&mut self) {
        self.core.release();
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.core.has_drag()
    }

    // === SAMPLING ===

    /// JSON pose snapshot (`{frame, poses: [{id, x, y, angle}, ...]}`).
    pub fn sample_json(&self) -> String {
        self.core.sample_json()
    }

    /// One body's pose as JSON, or `null` for an unknown id.
    pub fn query_pose_json(&self, body_id: String) -> String {
        match self.core.query(&body_id) {
            Some(pose) => serde_json::to_string(&pose).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Copy of the pose buffer as a typed array: [x, y, angle] per body
    /// in manifest order.
    pub fn sample_poses(&mut self) -> js_sys::Float32Array {
        self.core.fill_pose_buffer();
        js_sys::Float32Array::from(self.core.pose_buffer_slice())
    }

    /// Zero-copy alternative: refill the buffer and return its pointer.
    pub fn poses_ptr(&mut self) -> *const f32 {
        self.core.fill_pose_buffer();
        self.core.poses_ptr()
    }

    pub fn poses_len(&self) -> usize {
        self.core.poses_len()
    }

    // === COUNTS / SETTINGS ===

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.dynamic_body_count()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_gravity_scale(&mut self, scale: f32) {
        self.core.set_gravity_scale(scale);
    }

    pub fn set_air_damping(&mut self, damping: f32) {
        self.core.set_air_damping(damping);
    }

    pub fn set_body_restitution(&mut self, restitution: f32) {
        self.core.set_body_restitution(restitution);
    }

    pub fn set_body_friction(&mut self, friction: f32) {
        self.core.set_body_friction(friction);
    }

    /// Seed the placement rng (call before `initialize`).
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}