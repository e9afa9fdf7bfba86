use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::rigid_body::{Pose, ShapeSpec, Size, Vec2};

/// One static rectangle of the level, in simulation units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticRectSpec {
    pub size: Size,
    /// Center of the rectangle
    pub position: Vec2,
    #[serde(default)]
    pub angle_degrees: f32,
}

impl StaticRectSpec {
    pub fn new(width: f32, height: f32, x: f32, y: f32, angle_degrees: f32) -> Self {
        Self {
            size: Size::new(width, height),
            position: Vec2::new(x, y),
            angle_degrees,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        ShapeSpec::Rect { width: self.size.width, height: self.size.height }.validate()?;
        let pose = Pose::new(self.position, self.angle_degrees);
        if pose.is_finite() {
            Ok(())
        } else {
            Err(EngineError::InvalidPose {
                x: self.position.x,
                y: self.position.y,
                rotation: self.angle_degrees,
            })
        }
    }
}

/// Ordered level geometry, spawned once before the first step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub statics: Vec<StaticRectSpec>,
}

impl SceneLayout {
    /// Zig-zag ramps down an 8x6 viewport, a floor and a short left wall.
    pub fn sandbox() -> Self {
        Self {
            statics: vec![
                StaticRectSpec::new(4.0, 0.1, 2.0, 1.0, 15.0),
                StaticRectSpec::new(4.0, 0.1, 6.0, 2.0, -10.0),
                StaticRectSpec::new(4.0, 0.1, 2.0, 3.0, 15.0),
                StaticRectSpec::new(4.0, 0.1, 6.0, 4.0, -10.0),
                StaticRectSpec::new(8.0, 0.1, 4.0, 5.95, 0.0),
                StaticRectSpec::new(0.1, 1.0, 0.05, 5.5, 0.0),
            ],
        }
    }

    /// Parse and validate every entry; the error names the first bad one.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let layout: SceneLayout =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidLayout(e.to_string()))?;
        for (idx, spec) in layout.statics.iter().enumerate() {
            spec.validate()
                .map_err(|e| EngineError::InvalidLayout(format!("static #{}: {}", idx, e)))?;
        }
        Ok(layout)
    }

    pub fn len(&self) -> usize {
        self.statics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_layout_has_ramps_floor_and_wall() {
        let layout = SceneLayout::sandbox();
        assert_eq!(layout.len(), 6);
        let floor = &layout.statics[4];
        assert_eq!(floor.size, Size::new(8.0, 0.1));
        assert_eq!(floor.position, Vec2::new(4.0, 5.95));
        assert_eq!(floor.angle_degrees, 0.0);
    }

    #[test]
    fn parses_json_with_default_angle() {
        let json = r#"{
            "statics": [
                { "size": { "width": 8.0, "height": 0.1 }, "position": { "x": 4.0, "y": 5.95 } },
                { "size": { "width": 4.0, "height": 0.1 }, "position": { "x": 2.0, "y": 1.0 }, "angle_degrees": 15.0 }
            ]
        }"#;
        let layout = SceneLayout::from_json(json).expect("valid layout");
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.statics[0].angle_degrees, 0.0);
        assert_eq!(layout.statics[1].angle_degrees, 15.0);
    }

    #[test]
    fn rejects_degenerate_rect() {
        let json = r#"{ "statics": [
            { "size": { "width": 4.0, "height": 0.1 }, "position": { "x": 2.0, "y": 1.0 } },
            { "size": { "width": 0.0, "height": 0.1 }, "position": { "x": 2.0, "y": 1.0 } }
        ] }"#;
        match SceneLayout::from_json(json) {
            Err(EngineError::InvalidLayout(msg)) => assert!(msg.starts_with("static #1:"), "{}", msg),
            other => panic!("expected layout error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SceneLayout::from_json("{ \"statics\": 3 }"),
            Err(EngineError::InvalidLayout(_))
        ));
    }
}
