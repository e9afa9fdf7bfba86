use super::SimulationWorld;

/// Nominal 60 Hz tick, truncated to whole milliseconds like a UI timer.
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = (1000 / 60) as f64;

/// Fixed-interval tick source.
///
/// The host polls it with its own clock (e.g. from `requestAnimationFrame`).
/// Each poll fires at most one `step()`; elapsed time never reaches the
/// physics, which always advances by its fixed timestep. Ticks missed while
/// the host was stalled are dropped, not replayed.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    interval_ms: f64,
    next_due_ms: Option<f64>,
    ticks: u64,
}

impl FrameDriver {
    /// Non-positive or non-finite intervals fall back to the default.
    pub fn new(interval_ms: f64) -> Self {
        let interval_ms = if interval_ms.is_finite() && interval_ms > 0.0 {
            interval_ms
        } else {
            DEFAULT_FRAME_INTERVAL_MS
        };
        Self {
            interval_ms,
            next_due_ms: None,
            ticks: 0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Steps fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Disarm; the next poll starts a fresh interval.
    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }

    /// Step `world` if an interval has elapsed. Returns whether it stepped.
    ///
    /// The first poll only arms the timer.
    pub fn poll(&mut self, now_ms: f64, world: &mut SimulationWorld) -> bool {
        let Some(due) = self.next_due_ms else {
            self.next_due_ms = Some(now_ms + self.interval_ms);
            return false;
        };
        if now_ms < due {
            return false;
        }

        world.step();
        self.ticks += 1;

        let next = due + self.interval_ms;
        self.next_due_ms = Some(if next <= now_ms { now_ms + self.interval_ms } else { next });
        true
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_MS)
    }
}
