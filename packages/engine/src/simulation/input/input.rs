use crate::rigid_body::Vec2;

use super::{EntityId, SimulationWorld};

/// Pointer-down inside the viewport spawns one default circle there.
///
/// Clicks outside the viewport and rejected spawns are ignored (`None`);
/// rejections are logged as warnings.
pub fn pointer_down(world: &mut SimulationWorld, screen_x: f32, screen_y: f32) -> Option<EntityId> {
    let viewport = world.config().viewport_px();
    if !(0.0..=viewport.width).contains(&screen_x) || !(0.0..=viewport.height).contains(&screen_y) {
        return None;
    }

    match world.spawn_dynamic(Vec2::new(screen_x, screen_y)) {
        Ok(id) => Some(id),
        Err(err) => {
            console_warn!("click at ({}, {}) ignored: {}", screen_x, screen_y, err);
            None
        }
    }
}
