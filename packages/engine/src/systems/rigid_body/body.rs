use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rapier2d::prelude::RigidBodyHandle;

use crate::core::error::EngineError;
use crate::rigid_body_system::{PhysicsWorld, SharedPhysics};

use super::shape::{validate_pose, BodyKind, Material, ShapeSpec};
use super::vec2::Pose;

/// One rigid body registered with the physics world.
///
/// Registered in `create_*`, unregistered in `Drop`. Not `Clone`: the only way
/// to release the registration is to drop the single owner.
#[derive(Debug)]
pub struct PhysicsBody {
    kind: BodyKind,
    handle: RigidBodyHandle,
    /// Non-owning; the simulation world holds the only strong reference.
    world: Weak<RefCell<PhysicsWorld>>,
}

impl PhysicsBody {
    /// Register a movable body. Validates the shape before touching the world.
    pub fn create_dynamic(
        world: &SharedPhysics,
        shape: ShapeSpec,
        pose: Pose,
        material: Material,
    ) -> Result<Self, EngineError> {
        Self::create(world, BodyKind::Dynamic, shape, pose, material)
    }

    /// Register an immovable body.
    pub fn create_static(world: &SharedPhysics, shape: ShapeSpec, pose: Pose) -> Result<Self, EngineError> {
        Self::create(world, BodyKind::Static, shape, pose, Material::STATIC)
    }

    fn create(
        world: &SharedPhysics,
        kind: BodyKind,
        shape: ShapeSpec,
        pose: Pose,
        material: Material,
    ) -> Result<Self, EngineError> {
        shape.validate()?;
        validate_pose(&pose)?;

        let handle = world.borrow_mut().insert_body(kind, shape, pose, material);
        Ok(Self {
            kind,
            handle,
            world: Rc::downgrade(world),
        })
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Live simulation-space transform.
    ///
    /// `None` only once the physics world itself is gone.
    pub fn current_pose(&self) -> Option<Pose> {
        let world = self.world.upgrade()?;
        let pose = world.borrow().body_pose(self.handle);
        pose
    }
}

impl Drop for PhysicsBody {
    fn drop(&mut self) {
        let Some(world) = self.world.upgrade() else {
            return;
        };
        if let Ok(mut world) = world.try_borrow_mut() {
            world.remove_body(self.handle);
        } else {
            // Only reachable if a body is dropped from inside a physics step.
            debug_assert!(false, "physics body dropped while the world was borrowed");
        };
    }
}
