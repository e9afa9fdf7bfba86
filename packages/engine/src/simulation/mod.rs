//! SimulationWorld - physics world + the visual entities bound to it
//!
//! One `step()` = one fixed physics timestep, then every entity pulls its
//! body's pose in spawn order. Integration always completes before the first
//! sync, so no entity ever observes a half-integrated world.
//!
//! Everything runs on the thread that owns the world: the physics world is
//! shared through `Rc<RefCell<_>>`, which makes `SimulationWorld` neither
//! `Send` nor `Sync`, and every entry point takes `&mut self`.

use serde::Serialize;

use crate::core::error::EngineError;
use crate::rigid_body::{Size, Vec2};
use crate::rigid_body_system::SharedPhysics;
use crate::visual::VisualEntity;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "layout/layout.rs"]
mod layout;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "driver/frame_driver.rs"]
mod frame_driver;
#[path = "input/input.rs"]
mod input;
mod facade;

pub use facade::World;
pub use frame_driver::{FrameDriver, DEFAULT_FRAME_INTERVAL_MS};
pub use input::pointer_down;
pub use layout::{SceneLayout, StaticRectSpec};
pub use perf_stats::PerfStats;
pub use render_extract::{RenderItem, RENDER_STRIDE, SHAPE_CIRCLE, SHAPE_RECT};
pub use settings::WorldConfig;

use perf_timer::PerfTimer;
use render_extract::RenderBuffers;

/// Radius of every clicked-in circle, in simulation units.
pub const DEFAULT_CIRCLE_RADIUS: f32 = 0.2;

/// Stable index into the entity collection (spawn order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(pub u32);

/// Stepping state machine. There is no paused state.
///
/// Spawn and step both take `&mut SimulationWorld`, so the borrow checker
/// already keeps them apart. `Stepping` is only observable from inside
/// `step`; the phase is kept so that rule is written down and checked in
/// debug builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Stepping,
}

/// The simulation world
pub struct SimulationWorld {
    // Field order matters: entities drop first so every body can still
    // unregister from the physics world.
    entities: Vec<VisualEntity>,
    physics: SharedPhysics,
    config: WorldConfig,

    // State
    phase: Phase,
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationWorld {
    /// Empty world: no statics, no circles.
    pub fn new(config: WorldConfig) -> Self {
        init::create_world(config)
    }

    /// World with the given static layout applied once.
    pub fn with_layout(config: WorldConfig, layout: &SceneLayout) -> Result<Self, EngineError> {
        let mut world = init::create_world(config);
        init::apply_layout(&mut world, layout)?;
        Ok(world)
    }

    /// The stock sandbox: default config and the ramp layout.
    pub fn sandbox() -> Result<Self, EngineError> {
        Self::with_layout(WorldConfig::default(), &SceneLayout::sandbox())
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn entities(&self) -> &[VisualEntity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&VisualEntity> {
        self.entities.get(id.0 as usize)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Bodies registered with the physics world (always equals `entity_count`).
    pub fn body_count(&self) -> usize {
        self.physics.borrow().body_count()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === SPAWNING ===

    /// Spawn a falling circle of the default radius at a screen position.
    pub fn spawn_dynamic(&mut self, screen_pos: Vec2) -> Result<EntityId, EngineError> {
        commands::spawn_dynamic_circle(self, screen_pos, DEFAULT_CIRCLE_RADIUS)
    }

    /// Spawn a falling circle with an explicit radius (simulation units).
    pub fn spawn_dynamic_circle(&mut self, screen_pos: Vec2, radius: f32) -> Result<EntityId, EngineError> {
        commands::spawn_dynamic_circle(self, screen_pos, radius)
    }

    /// Spawn an immovable rectangle. Meant for scene construction.
    pub fn spawn_static(
        &mut self,
        size: Size,
        screen_pos: Vec2,
        angle_degrees: f32,
    ) -> Result<EntityId, EngineError> {
        commands::spawn_static(self, size, screen_pos, angle_degrees)
    }

    /// Advance one fixed timestep, then sync every entity.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER API ===

    /// Refill the render transfer buffers. Returns the item count.
    pub fn collect_render_items(&mut self) -> usize {
        render_extract::collect_render_items(self)
    }

    /// Flat `[shape, x, y, rotation, width, height]` records, `RENDER_STRIDE` floats each
    pub fn render_items(&self) -> &[f32] {
        &self.render.items
    }

    /// One 0xAABBGGRR fill color per render item
    pub fn render_colors(&self) -> &[u32] {
        &self.render.colors
    }

    pub fn snapshot(&self) -> Vec<RenderItem> {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
