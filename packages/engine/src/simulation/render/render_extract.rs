use serde::Serialize;

use crate::visual::{Shape, Style};

use super::{EntityId, SimulationWorld};

/// Floats per render record: `[shape, x, y, rotation, width, height]`
pub const RENDER_STRIDE: usize = 6;
pub const SHAPE_CIRCLE: f32 = 0.0;
pub const SHAPE_RECT: f32 = 1.0;

/// Transfer buffers read by the JS renderer through raw pointers
#[derive(Default)]
pub(super) struct RenderBuffers {
    pub(super) items: Vec<f32>,
    pub(super) colors: Vec<u32>,
}

/// One drawable, screen space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: EntityId,
    pub shape: Shape,
    pub style: Style,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub color: u32,
}

pub(super) fn collect_render_items(world: &mut SimulationWorld) -> usize {
    let render = &mut world.render;
    render.items.clear();
    render.colors.clear();

    for entity in &world.entities {
        let pose = entity.pose();
        let shape = entity.shape();
        let extent = shape.extent();
        let tag = match shape {
            Shape::Circle { .. } => SHAPE_CIRCLE,
            Shape::Rect { .. } => SHAPE_RECT,
        };
        render.items.extend_from_slice(&[
            tag,
            pose.position.x,
            pose.position.y,
            pose.rotation,
            extent.width,
            extent.height,
        ]);
        render.colors.push(entity.style().fill_color());
    }

    render.colors.len()
}

pub(super) fn snapshot(world: &SimulationWorld) -> Vec<RenderItem> {
    world
        .entities
        .iter()
        .enumerate()
        .map(|(idx, entity)| {
            let pose = entity.pose();
            RenderItem {
                id: EntityId(idx as u32),
                shape: entity.shape(),
                style: entity.style(),
                x: pose.position.x,
                y: pose.position.y,
                rotation: pose.rotation,
                color: entity.style().fill_color(),
            }
        })
        .collect()
}

pub(super) fn snapshot_json(world: &SimulationWorld) -> String {
    match serde_json::to_string(&snapshot(world)) {
        Ok(json) => json,
        Err(e) => {
            console_error!("snapshot serialization failed: {}", e);
            "[]".to_string()
        }
    }
}
