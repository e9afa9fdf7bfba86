//! Tumble Engine - click-to-drop rigid body sandbox in WASM
//!
//! Circles spawned by pointer clicks fall under gravity onto a fixed set of
//! static ramps. Physics is rapier2d; this crate keeps the visual entities
//! in lockstep with the bodies they own and maps simulation units to pixels.
//!
//! Architecture:
//! - core/        - logging macros, errors, unit conversion
//! - systems/     - physics bodies, physics world, visual entities
//! - simulation/  - the stepping world, frame driver, input, render ABI, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::visual;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

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

    console_log!("Tumble engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Screen pixels per simulation unit
#[wasm_bindgen]
pub fn scale() -> f32 {
    crate::core::units::SCALE
}

// Re-export main types
pub use crate::core::error::EngineError;
pub use simulation::{EntityId, FrameDriver, SceneLayout, SimulationWorld, World, WorldConfig};
pub use visual::VisualEntity;
