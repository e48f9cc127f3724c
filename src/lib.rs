//! Playground Engine - rigid body sandbox behind the portfolio "gravity playground"
//!
//! Architecture:
//! - domain/     - Authored body descriptor catalog (cards, pills, icons, chips)
//! - systems/    - Rigid bodies, contact generation, impulse solver
//! - simulation/ - Orchestration only: world lifecycle, drag constraint, sampling
//!
//! The core is DOM-free; the hosting page talks to `Playground` (the wasm
//! facade) and positions its own elements from pose snapshots.

pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps internal/external paths short)
pub use systems::physics;
pub use systems::rigid_body;

pub use domain::content::{BodyCatalog, BodyDescriptor, BodyKind};
pub use simulation::{BodyPose, Playground, PlaygroundCore, PoseSnapshot};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"playground-engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
