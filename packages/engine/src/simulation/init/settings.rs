use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::core::units;
use crate::rigid_body::{Size, Vec2};

use super::perf_stats::PerfStats;
use super::SimulationWorld;

/// World settings, loadable from JSON. Missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Simulation units / s². +Y is down.
    pub gravity: Vec2,
    /// Viewport width in simulation units
    pub width: f32,
    /// Viewport height in simulation units
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 10.0),
            width: 8.0,
            height: 6.0,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: WorldConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.gravity.is_finite() {
            return Err(EngineError::InvalidConfig("gravity must be finite".to_string()));
        }
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Viewport size in screen pixels.
    pub fn viewport_px(&self) -> Size {
        units::size_to_screen(Size::new(self.width, self.height))
    }
}

pub(super) fn set_gravity(world: &mut SimulationWorld, x: f32, y: f32) {
    let gravity = Vec2::new(x, y);
    world.config.gravity = gravity;
    world.physics.borrow_mut().set_gravity(gravity);
}

pub(super) fn enable_perf_metrics(world: &mut SimulationWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SimulationWorld) -> PerfStats {
    world.perf_stats.clone()
}
