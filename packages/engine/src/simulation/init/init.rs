use crate::core::error::EngineError;
use crate::core::units;
use crate::rigid_body_system::PhysicsWorld;

use super::layout::SceneLayout;
use super::perf_stats::PerfStats;
use super::render_extract::RenderBuffers;
use super::settings::WorldConfig;
use super::{Phase, SimulationWorld};

pub(super) fn create_world(config: WorldConfig) -> SimulationWorld {
    SimulationWorld {
        entities: Vec::new(),
        physics: PhysicsWorld::shared(config.gravity),
        config,
        phase: Phase::Idle,
        frame: 0,
        render: RenderBuffers::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Spawn every static in layout order. Layout positions are simulation units.
pub(super) fn apply_layout(world: &mut SimulationWorld, layout: &SceneLayout) -> Result<(), EngineError> {
    for spec in &layout.statics {
        world.spawn_static(spec.size, units::point_to_screen(spec.position), spec.angle_degrees)?;
    }
    console_log!("scene ready: {} static bodies", layout.statics.len());
    Ok(())
}
