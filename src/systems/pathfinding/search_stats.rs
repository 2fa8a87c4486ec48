use wasm_bindgen::prelude::*;

use super::frontier::Frontier;

/// Wall clock in milliseconds: `Date.now()` in the browser, system time natively.
pub(super) fn clock_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Counters from one path search (zeros before the first search).
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub(crate) search_ms: f64,
    pub(crate) settled: u32,
    pub(crate) relaxations: u32,
    pub(crate) pushes: u32,
    pub(crate) stale_pops: u32,
    pub(crate) frontier_peak: u32,
}

impl SearchStats {
    /// Copy the frontier counters and stamp the elapsed time since `started_ms`.
    pub(super) fn finish(&mut self, frontier: &Frontier, started_ms: f64) {
        self.pushes = frontier.pushes();
        self.frontier_peak = frontier.peak();
        // System time may step backwards
        self.search_ms = (clock_ms() - started_ms).max(0.0);
    }
}

#[wasm_bindgen]
impl SearchStats {
    #[wasm_bindgen(getter)]
    pub fn search_ms(&self) -> f64 { self.search_ms }
    /// Nodes popped as the current minimum.
    #[wasm_bindgen(getter)]
    pub fn settled(&self) -> u32 { self.settled }
    #[wasm_bindgen(getter)]
    pub fn relaxations(&self) -> u32 { self.relaxations }
    #[wasm_bindgen(getter)]
    pub fn pushes(&self) -> u32 { self.pushes }
    /// Outdated frontier entries skipped on pop.
    #[wasm_bindgen(getter)]
    pub fn stale_pops(&self) -> u32 { self.stale_pops }
    #[wasm_bindgen(getter)]
    pub fn frontier_peak(&self) -> u32 { self.frontier_peak }
}
