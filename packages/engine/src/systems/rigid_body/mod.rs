//! PhysicsBody - one engine rigid body, owned by exactly one visual entity
//!
//! A body registers itself with the shared physics world when it is created
//! and unregisters when it is dropped. Engine handles never leave this module
//! pair (`rigid_body` + `rigid_body_system`), so a body can be neither leaked
//! nor destroyed twice.

mod vec2;
mod shape;
mod body;

pub use vec2::{Pose, Size, Vec2};
pub use shape::{BodyKind, Material, ShapeSpec};
pub use body::PhysicsBody;
