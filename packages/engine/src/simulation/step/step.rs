use super::{Phase, PerfTimer, SimulationWorld};

pub(super) fn step(world: &mut SimulationWorld) {
    // Same guard as spawning: `&mut` already rules out re-entry.
    debug_assert_eq!(world.phase, Phase::Idle, "step re-entered");
    world.phase = Phase::Stepping;

    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // 1. Integrate. The RefMut is released before any entity reads a pose.
    world.physics.borrow_mut().step();
    let physics_ms = step_start.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    // 2. Sync in spawn order.
    let sync_start = if perf_on { Some(PerfTimer::start()) } else { None };
    for entity in world.entities.iter_mut() {
        entity.sync();
    }
    let sync_ms = sync_start.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    world.frame += 1;
    world.phase = Phase::Idle;

    if let Some(start) = step_start {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.step_ms = start.elapsed_ms();
        stats.physics_ms = physics_ms;
        stats.sync_ms = sync_ms;
        stats.entities_synced = world.entities.len() as u32;
        stats.frame = world.frame as f64;
    }
}
