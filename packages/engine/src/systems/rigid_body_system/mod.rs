//! RigidBodySystem - the physics engine world behind every body
//!
//! Wraps the rapier2d pipeline (bodies, colliders, islands, broad/narrow
//! phase, CCD) and advances it by one fixed timestep per call. Collision
//! detection and solving are entirely rapier's; this layer only owns the
//! state and converts poses at the boundary.

mod system;

pub use system::{PhysicsWorld, SharedPhysics, FIXED_TIMESTEP};
