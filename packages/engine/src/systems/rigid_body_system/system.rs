use std::cell::RefCell;
use std::rc::Rc;

use rapier2d::prelude::*;

use crate::rigid_body::{BodyKind, Material, Pose, ShapeSpec, Vec2};

/// Simulated seconds per step, independent of wall-clock tick jitter.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Owned by `SimulationWorld`; bodies keep a `Weak` to it.
pub type SharedPhysics = Rc<RefCell<PhysicsWorld>>;

/// The physics engine's world: every registered body and collider.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// +Y is down, so falling means positive `gravity.y`.
    pub fn new(gravity: Vec2) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = FIXED_TIMESTEP;

        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    pub fn shared(gravity: Vec2) -> SharedPhysics {
        Rc::new(RefCell::new(Self::new(gravity)))
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = vector![gravity.x, gravity.y];
    }

    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance exactly one fixed timestep. No substepping.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Register a body with a single collider. Shape must already be validated.
    pub(crate) fn insert_body(
        &mut self,
        kind: BodyKind,
        shape: ShapeSpec,
        pose: Pose,
        material: Material,
    ) -> RigidBodyHandle {
        let builder = match kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Static => RigidBodyBuilder::fixed(),
        };
        let body = builder
            .translation(vector![pose.position.x, pose.position.y])
            .rotation(pose.rotation)
            .linear_damping(material.linear_damping)
            // Fast fallers must not skip through 0.1-unit ramps.
            .ccd_enabled(kind == BodyKind::Dynamic)
            .build();
        let handle = self.bodies.insert(body);

        let collider = match shape {
            ShapeSpec::Circle { radius } => ColliderBuilder::ball(radius),
            ShapeSpec::Rect { width, height } => ColliderBuilder::cuboid(width / 2.0, height / 2.0),
        }
        .density(material.density)
        .friction(material.friction)
        .restitution(material.restitution)
        // Bounce off ramps with the bouncier of the two materials.
        .restitution_combine_rule(CoefficientCombineRule::Max)
        .build();

        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Unregister a body and its collider. Returns false if it was not registered.
    pub(crate) fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub(crate) fn body_pose(&self, handle: RigidBodyHandle) -> Option<Pose> {
        let body = self.bodies.get(handle)?;
        let t = body.translation();
        Some(Pose::new(Vec2::new(t.x, t.y), body.rotation().angle()))
    }
}
