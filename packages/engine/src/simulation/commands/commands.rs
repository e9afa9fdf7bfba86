use crate::core::error::EngineError;
use crate::rigid_body::{Size, Vec2};
use crate::visual::VisualEntity;

use super::{EntityId, Phase, SimulationWorld};

pub(super) fn spawn_dynamic_circle(
    world: &mut SimulationWorld,
    screen_pos: Vec2,
    radius: f32,
) -> Result<EntityId, EngineError> {
    // Unreachable through `&mut`; kept as the written form of the phase rule.
    debug_assert_eq!(world.phase, Phase::Idle, "spawn while stepping");
    let entity = VisualEntity::spawn_dynamic_circle(&world.physics, radius, screen_pos)?;
    Ok(push_entity(world, entity))
}

pub(super) fn spawn_static(
    world: &mut SimulationWorld,
    size: Size,
    screen_pos: Vec2,
    angle_degrees: f32,
) -> Result<EntityId, EngineError> {
    debug_assert_eq!(world.phase, Phase::Idle, "spawn while stepping");
    let entity = VisualEntity::spawn_static_rect(&world.physics, size, screen_pos, angle_degrees)?;
    Ok(push_entity(world, entity))
}

fn push_entity(world: &mut SimulationWorld, entity: VisualEntity) -> EntityId {
    let id = EntityId(world.entities.len() as u32);
    world.entities.push(entity);
    id
}
