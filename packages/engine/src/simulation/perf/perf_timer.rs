/// Millisecond stopwatch: `Date.now()` in the browser, a monotonic clock natively.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}
