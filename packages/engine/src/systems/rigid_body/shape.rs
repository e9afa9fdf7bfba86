use crate::core::error::EngineError;

use super::vec2::Pose;

/// Movable or immovable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    Static,
}

/// Collision shape in simulation units.
///
/// Rectangles are oriented through the body pose, not through the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeSpec {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl ShapeSpec {
    /// Reject shapes the engine cannot build a collider for.
    pub fn validate(&self) -> Result<(), EngineError> {
        match *self {
            ShapeSpec::Circle { radius } => positive("radius", radius),
            ShapeSpec::Rect { width, height } => {
                positive("width", width)?;
                positive("height", height)
            }
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidShapeSpec { field, value })
    }
}

pub(crate) fn validate_pose(pose: &Pose) -> Result<(), EngineError> {
    if pose.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidPose {
            x: pose.position.x,
            y: pose.position.y,
            rotation: pose.rotation,
        })
    }
}

/// Collider/body material. Fixed per body kind, not user-configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub linear_damping: f32,
}

impl Material {
    /// Falling circles: bouncy, lightly damped.
    pub const DYNAMIC: Material = Material {
        density: 1.0,
        friction: 0.2,
        restitution: 0.7,
        linear_damping: 0.2,
    };

    /// Ramps and walls.
    pub const STATIC: Material = Material {
        density: 0.0,
        friction: 0.2,
        restitution: 0.0,
        linear_damping: 0.0,
    };
}
