use serde::Serialize;

use crate::core::error::EngineError;
use crate::core::units;
use crate::rigid_body::{BodyKind, Material, PhysicsBody, Pose, ShapeSpec, Size, Vec2};
use crate::rigid_body_system::SharedPhysics;

use super::style::Style;

/// Render geometry in screen pixels, centered on the entity pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Shape {
    /// Bounding width/height in pixels.
    pub fn extent(&self) -> Size {
        match *self {
            Shape::Circle { radius } => Size::new(radius * 2.0, radius * 2.0),
            Shape::Rect { width, height } => Size::new(width, height),
        }
    }
}

/// On-screen shape that owns its physics body.
///
/// Dropping the entity unregisters the body.
#[derive(Debug)]
pub struct VisualEntity {
    shape: Shape,
    style: Style,
    /// Screen-space pose as of the last sync
    pose: Pose,
    body: PhysicsBody,
}

impl VisualEntity {
    /// Falling circle at a screen position.
    ///
    /// `radius` is authored in simulation units and is not scaled.
    pub fn spawn_dynamic_circle(
        world: &SharedPhysics,
        radius: f32,
        screen_pos: Vec2,
    ) -> Result<Self, EngineError> {
        let sim_pose = Pose::new(units::point_to_sim(screen_pos), 0.0);
        let body = PhysicsBody::create_dynamic(
            world,
            ShapeSpec::Circle { radius },
            sim_pose,
            Material::DYNAMIC,
        )?;

        let mut entity = Self {
            shape: Shape::Circle { radius: units::to_screen(radius) },
            style: Style::Ball,
            pose: Pose::new(screen_pos, 0.0),
            body,
        };
        entity.sync();
        Ok(entity)
    }

    /// Immovable rectangle; `size` in simulation units, angle in degrees.
    pub fn spawn_static_rect(
        world: &SharedPhysics,
        size: Size,
        screen_pos: Vec2,
        angle_degrees: f32,
    ) -> Result<Self, EngineError> {
        let rotation = angle_degrees.to_radians();
        let body = PhysicsBody::create_static(
            world,
            ShapeSpec::Rect { width: size.width, height: size.height },
            Pose::new(units::point_to_sim(screen_pos), rotation),
        )?;

        let screen_size = units::size_to_screen(size);
        Ok(Self {
            shape: Shape::Rect { width: screen_size.width, height: screen_size.height },
            style: Style::Ground,
            pose: Pose::new(screen_pos, rotation),
            body,
        })
    }

    /// Pull the body's pose into screen space. Static entities never move.
    pub fn sync(&mut self) {
        if self.body.kind() == BodyKind::Static {
            return;
        }
        if let Some(sim) = self.body.current_pose() {
            self.pose = Pose::new(units::point_to_screen(sim.position), sim.rotation);
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn kind(&self) -> BodyKind {
        self.body.kind()
    }

    pub fn body(&self) -> &PhysicsBody {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body_system::PhysicsWorld;

    fn world() -> SharedPhysics {
        PhysicsWorld::shared(Vec2::new(0.0, 10.0))
    }

    #[test]
    fn dynamic_circle_starts_at_click_point() {
        let world = world();
        let ball = VisualEntity::spawn_dynamic_circle(&world, 0.2, Vec2::new(250.0, 40.0))
            .expect("valid radius");

        assert_eq!(ball.kind(), BodyKind::Dynamic);
        let extent = ball.shape().extent();
        assert!((extent.width - 40.0).abs() < 1e-4 && (extent.height - 40.0).abs() < 1e-4);
        assert_eq!(ball.style(), Style::Ball);

        let sim = ball.body().current_pose().expect("registered").position;
        assert!((sim.x - 2.5).abs() < 1e-6);
        assert!((sim.y - 0.4).abs() < 1e-6);
        assert!((ball.pose().position.x - 250.0).abs() < 1e-3);
        assert!((ball.pose().position.y - 40.0).abs() < 1e-3);
    }

    #[test]
    fn sync_follows_body_after_step() {
        let world = world();
        let mut ball = VisualEntity::spawn_dynamic_circle(&world, 0.2, Vec2::new(400.0, 0.0))
            .expect("valid radius");

        for _ in 0..10 {
            world.borrow_mut().step();
        }
        ball.sync();

        let sim = ball.body().current_pose().expect("registered");
        assert_eq!(ball.pose().position, units::point_to_screen(sim.position));
        assert_eq!(ball.pose().rotation, sim.rotation);
        assert!(ball.pose().position.y > 0.0);
    }

    #[test]
    fn static_rect_keeps_authored_pose() {
        let world = world();
        let mut ramp = VisualEntity::spawn_static_rect(
            &world,
            Size::new(4.0, 0.1),
            Vec2::new(200.0, 100.0),
            15.0,
        )
        .expect("valid ramp");
        let before = ramp.pose();

        world.borrow_mut().step();
        ramp.sync();

        assert_eq!(ramp.pose(), before);
        let extent = ramp.shape().extent();
        assert!((extent.width - 400.0).abs() < 1e-3);
        assert!((extent.height - 10.0).abs() < 1e-4);
        assert!((before.rotation - 15.0f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn rejected_radius_leaves_world_untouched() {
        let world = world();
        let err = VisualEntity::spawn_dynamic_circle(&world, -0.2, Vec2::new(10.0, 10.0))
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidShapeSpec { field: "radius", value: -0.2 });
        assert_eq!(world.borrow().body_count(), 0);
    }

    #[test]
    fn dropping_entity_releases_body() {
        let world = world();
        let a = VisualEntity::spawn_dynamic_circle(&world, 0.2, Vec2::new(400.0, 0.0))
            .expect("valid radius");
        let b = VisualEntity::spawn_dynamic_circle(&world, 0.2, Vec2::new(400.0, 0.0))
            .expect("valid radius");
        assert_eq!(world.borrow().body_count(), 2);

        drop(a);
        assert_eq!(world.borrow().body_count(), 1);
        assert!(b.body().current_pose().is_some());
    }
}
