use std::fmt;

/// Everything the engine can reject.
///
/// Engine-level failures inside the physics step are not represented here:
/// they panic and end the session, there is no degraded simulation state.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Non-positive or non-finite radius/width/height.
    InvalidShapeSpec { field: &'static str, value: f32 },
    /// Non-finite spawn position or rotation.
    InvalidPose { x: f32, y: f32, rotation: f32 },
    InvalidConfig(String),
    InvalidLayout(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidShapeSpec { field, value } => {
                write!(f, "invalid shape: {} must be positive and finite, got {}", field, value)
            }
            EngineError::InvalidPose { x, y, rotation } => {
                write!(f, "invalid pose: ({}, {}) rotated {} is not finite", x, y, rotation)
            }
            EngineError::InvalidConfig(msg) => write!(f, "invalid world config: {}", msg),
            EngineError::InvalidLayout(msg) => write!(f, "invalid scene layout: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_field() {
        let err = EngineError::InvalidShapeSpec { field: "radius", value: 0.0 };
        assert_eq!(err.to_string(), "invalid shape: radius must be positive and finite, got 0");
    }
}
