//! Panelgrid Engine - cabinet panel measuring grid in WASM
//!
//! An operator picks a start and an end box on a panel drawn as sections of
//! rows x cols boxes; the engine routes through neighbouring boxes that are
//! present and reports the cable length in millimetres.
//!
//! Architecture:
//! - core/     - coordinates, costs, safety macros, console output
//! - spatial/  - grid model (configuration, layout mask, active cells)
//! - systems/  - path engine
//! - domain/   - ledger collaborator
//! - session/  - measurement session state machine and its JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod error;
pub mod spatial;
pub mod systems;
pub mod domain;
pub mod session;

// Short paths
pub use spatial::grid;
pub use systems::pathfinding;
pub use domain::ledger;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::utils::console::log("📐 Panelgrid WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Coord;
pub use error::{EngineError, GridError, LedgerError, PathError, Result};
pub use grid::{ActiveCellSet, GridConfig, GridModel, LayoutMask};
pub use ledger::{Ledger, MemoryLedger, RowIndex};
pub use pathfinding::{shortest_path, total_distance, Path, SearchStats};
pub use session::{
    LedgerStatus, Measurement, MeasurementSession, MeasuringGrid, PickOutcome, Selection,
};

// Export cost constants and pick codes for JS
#[wasm_bindgen]
pub fn start_cost() -> u32 { crate::core::START_COST }
#[wasm_bindgen]
pub fn hop_cost() -> u32 { crate::core::HOP_COST }
#[wasm_bindgen]
pub fn end_cost() -> u32 { crate::core::END_COST }
#[wasm_bindgen]
pub fn max_sections() -> u32 { crate::core::MAX_SECTIONS }
#[wasm_bindgen]
pub fn max_rows() -> u32 { crate::core::MAX_ROWS }
#[wasm_bindgen]
pub fn max_cols() -> u32 { crate::core::MAX_COLS }
#[wasm_bindgen]
pub fn pick_ignored() -> u8 { session::PICK_IGNORED }
#[wasm_bindgen]
pub fn pick_start_selected() -> u8 { session::PICK_START_SELECTED }
#[wasm_bindgen]
pub fn pick_measured() -> u8 { session::PICK_MEASURED }
#[wasm_bindgen]
pub fn pick_not_found() -> u8 { session::PICK_NOT_FOUND }
