//! VisualEntity - a drawable shape bound to the physics body it owns

mod entity;
mod style;

pub use entity::{Shape, VisualEntity};
pub use style::Style;
