use tumble_engine::core::units::{self, SCALE};
use tumble_engine::rigid_body::{BodyKind, Size, Vec2};
use tumble_engine::simulation::{pointer_down, FrameDriver, StaticRectSpec, RENDER_STRIDE};
use tumble_engine::{SceneLayout, SimulationWorld, World, WorldConfig};

#[test]
fn clicked_circles_fall_and_stay_synced() {
    let mut world = SimulationWorld::sandbox().expect("stock layout");

    for x in [60.0, 150.0, 240.0, 330.0] {
        assert!(pointer_down(&mut world, x, 20.0).is_some());
    }
    for _ in 0..600 {
        world.step();
    }

    for entity in world.entities().iter().filter(|e| e.kind() == BodyKind::Dynamic) {
        let p = entity.pose().position;
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.y > 20.0, "circle never left its spawn height: y = {}", p.y);
        let sim = entity.body().current_pose().expect("registered");
        assert_eq!(p, units::point_to_screen(sim.position));
    }
    assert_eq!(world.body_count(), world.entity_count());
}

#[test]
fn frame_driver_steps_on_a_fixed_cadence() {
    let mut world = SimulationWorld::sandbox().expect("stock layout");
    world.spawn_dynamic(Vec2::new(400.0, 10.0)).unwrap();
    let mut driver = FrameDriver::default();

    // One simulated second of host frames at ~144 Hz.
    let mut now = 0.0;
    while now <= 1000.0 {
        driver.poll(now, &mut world);
        now += 1000.0 / 144.0;
    }

    let frames = world.frame();
    assert!((55..=63).contains(&frames), "stepped {} times", frames);
    assert_eq!(driver.ticks(), frames);
}

#[test]
fn custom_layout_from_json() {
    let layout = SceneLayout::from_json(
        r#"{ "statics": [
            { "size": { "width": 8.0, "height": 0.1 }, "position": { "x": 4.0, "y": 5.95 } }
        ] }"#,
    )
    .expect("valid layout");
    let config = WorldConfig::from_json(r#"{ "gravity": { "x": 0.0, "y": 10.0 } }"#).unwrap();

    let mut world = SimulationWorld::with_layout(config, &layout).expect("valid world");
    let ball = world.spawn_dynamic(units::point_to_screen(Vec2::new(4.0, 0.0))).unwrap();
    for _ in 0..600 {
        world.step();
    }

    let y = world.entity(ball).unwrap().pose().position.y / SCALE;
    assert!(y > 0.0 && y < 5.75, "ball resting at y = {}", y);
}

#[test]
fn static_spawn_takes_screen_position() {
    let mut world = SimulationWorld::new(WorldConfig::default());
    let spec = StaticRectSpec::new(4.0, 0.1, 6.0, 2.0, -10.0);
    let id = world
        .spawn_static(spec.size, units::point_to_screen(spec.position), spec.angle_degrees)
        .unwrap();

    let ramp = world.entity(id).unwrap();
    let sim = ramp.body().current_pose().unwrap();
    assert!((sim.position.x - 6.0).abs() < 1e-5);
    assert!((sim.position.y - 2.0).abs() < 1e-5);
    assert!((sim.rotation - (-10.0f32).to_radians()).abs() < 1e-5);
    assert_eq!(world.spawn_static(Size::new(1.0, 1.0), Vec2::new(1.0, 1.0), 0.0).unwrap().0, 1);
}

#[test]
fn facade_round_trip_without_js() {
    let mut world = World::new_empty();
    assert_eq!(world.entity_count(), 0);
    assert_eq!(world.viewport_width_px(), 800.0);
    assert_eq!(world.viewport_height_px(), 600.0);

    assert_eq!(world.pointer_down(400.0, 100.0), Some(0));
    assert_eq!(world.pointer_down(4000.0, 100.0), None);

    assert!(!world.tick(0.0));
    assert!(world.tick(16.0));
    assert_eq!(world.frame(), 1);

    assert_eq!(world.collect_render_items(), 1);
    assert_eq!(world.render_items_len(), RENDER_STRIDE);
    assert_eq!(world.render_colors_len(), 1);
    assert!(!world.render_items_ptr().is_null());
    assert!(world.snapshot_json().contains("\"style\":\"ball\""));
    assert_eq!(world.core().body_count(), 1);
}
