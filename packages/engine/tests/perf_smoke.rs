use tumble_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new().expect("stock layout");
    world.enable_perf_metrics(true);
    for i in 0..40 {
        let x = 20.0 + (i % 20) as f32 * 38.0;
        let y = 10.0 + (i / 20) as f32 * 30.0;
        assert!(world.pointer_down(x, y).is_some());
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.entities_synced(), 46);
}
