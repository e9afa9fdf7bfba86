use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;

use super::frame_driver::FrameDriver;
use super::input;
use super::layout::SceneLayout;
use super::perf_stats::PerfStats;
use super::render_extract::RENDER_STRIDE;
use super::settings::WorldConfig;
use super::SimulationWorld;

fn to_js(err: EngineError) -> JsValue {
    console_error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// JS-facing sandbox: simulation world + its frame driver
#[wasm_bindgen]
pub struct World {
    core: SimulationWorld,
    driver: FrameDriver,
}

#[wasm_bindgen]
impl World {
    /// The stock sandbox (ramps, floor, wall)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<World, JsValue> {
        let core = SimulationWorld::sandbox().map_err(to_js)?;
        Ok(Self {
            core,
            driver: FrameDriver::default(),
        })
    }

    /// No statics at all
    #[wasm_bindgen(js_name = newEmpty)]
    pub fn new_empty() -> World {
        Self {
            core: SimulationWorld::new(WorldConfig::default()),
            driver: FrameDriver::default(),
        }
    }

    /// Both arguments are JSON; see `WorldConfig` and `SceneLayout`
    #[wasm_bindgen(js_name = withLayoutJson)]
    pub fn with_layout_json(config_json: &str, layout_json: &str) -> Result<World, JsValue> {
        let config = WorldConfig::from_json(config_json).map_err(to_js)?;
        let layout = SceneLayout::from_json(layout_json).map_err(to_js)?;
        let core = SimulationWorld::with_layout(config, &layout).map_err(to_js)?;
        Ok(Self {
            core,
            driver: FrameDriver::default(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> usize { self.core.entity_count() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn viewport_width_px(&self) -> f32 { self.core.config().viewport_px().width }

    #[wasm_bindgen(getter)]
    pub fn viewport_height_px(&self) -> f32 { self.core.config().viewport_px().height }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Step once, unconditionally
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Host clock tick; steps at most once when the frame interval has elapsed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.driver.poll(now_ms, &mut self.core)
    }

    /// Spawn a circle at a canvas coordinate. `undefined` when ignored.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        input::pointer_down(&mut self.core, x, y).map(|id| id.0)
    }

    // === RENDER API ===

    /// Refill render buffers from current poses; returns item count
    pub fn collect_render_items(&mut self) -> usize {
        self.core.collect_render_items()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    /// Pointer to `[shape, x, y, rotation, width, height]` f32 records
    pub fn render_items_ptr(&self) -> *const f32 {
        self.core.render_items().as_ptr()
    }

    pub fn render_items_len(&self) -> usize {
        self.core.render_items().len()
    }

    /// Pointer to one u32 fill color per item
    pub fn render_colors_ptr(&self) -> *const u32 {
        self.core.render_colors().as_ptr()
    }

    pub fn render_colors_len(&self) -> usize {
        self.core.render_colors().len()
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }
}

impl World {
    /// Native access for tests and embedders
    pub fn core(&self) -> &SimulationWorld {
        &self.core
    }
}
