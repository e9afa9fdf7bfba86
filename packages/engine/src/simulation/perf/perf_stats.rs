use wasm_bindgen::prelude::*;

/// Timing snapshot of the last `step()`
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) entities_synced: u32,
    pub(super) frame: f64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Whole step: physics + sync
    pub fn step_ms(&self) -> f64 { self.step_ms }

    pub fn physics_ms(&self) -> f64 { self.physics_ms }

    pub fn sync_ms(&self) -> f64 { self.sync_ms }

    pub fn entities_synced(&self) -> u32 { self.entities_synced }

    /// Frame number the snapshot belongs to
    pub fn frame(&self) -> f64 { self.frame }
}
