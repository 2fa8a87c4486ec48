use wasm_bindgen::prelude::*;

use crate::core::utils::console;
use crate::core::Coord;
use crate::pathfinding::SearchStats;
use crate::spatial::grid::{GridConfig, LayoutMask};

use super::{format_measurement, JsLedger, LedgerStatus, MeasurementSession, PickOutcome};

pub const PICK_IGNORED: u8 = 0;
pub const PICK_START_SELECTED: u8 = 1;
pub const PICK_MEASURED: u8 = 2;
pub const PICK_NOT_FOUND: u8 = 3;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    let message = e.to_string();
    console::warn(&message);
    JsValue::from_str(&message)
}

fn flatten(cells: &[Coord]) -> Vec<u32> {
    cells.iter().flat_map(|c| [c.row, c.col]).collect()
}

/// JS handle on a measurement session.
///
/// Coordinates cross the boundary as `(row, col)` pairs; lists of cells are
/// flat `[r0, c0, r1, c1, ...]` arrays.
#[wasm_bindgen]
pub struct MeasuringGrid {
    session: MeasurementSession,
    last_ledger_error: Option<String>,
}

#[wasm_bindgen]
impl MeasuringGrid {
    /// Default 5 x 7 x 4 panel, all boxes present
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: MeasurementSession::default(),
            last_ledger_error: None,
        }
    }

    #[wasm_bindgen(js_name = withDimensions)]
    pub fn with_dimensions(sections: u32, rows: u32, cols: u32) -> Result<MeasuringGrid, JsValue> {
        let session = MeasurementSession::with_dimensions(sections, rows, cols).map_err(js_error)?;
        Ok(Self { session, last_ledger_error: None })
    }

    #[wasm_bindgen(getter)]
    pub fn sections(&self) -> u32 { self.session.grid().config().sections() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.session.grid().config().rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.session.grid().config().cols() }

    #[wasm_bindgen(getter)]
    pub fn total_cols(&self) -> u32 { self.session.grid().total_cols() }

    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> usize { self.session.grid().active_count() }

    pub fn is_active(&self, row: u32, col: u32) -> bool {
        self.session.grid().is_active(Coord::new(row, col))
    }

    /// Tooltip text for a cell
    pub fn cell_label(&self, row: u32, col: u32) -> String {
        Coord::new(row, col).label(self.cols())
    }

    /// Active cells of one section (flat pairs, global columns)
    pub fn section_cells(&self, section: u32) -> Vec<u32> {
        flatten(&self.session.grid().cells_in_section(section))
    }

    // === CONFIGURATION ===

    pub fn rebuild(&mut self, sections: u32, rows: u32, cols: u32) -> Result<(), JsValue> {
        self.session.rebuild(sections, rows, cols).map_err(js_error)?;
        Ok(())
    }

    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        let config = GridConfig::from_json(&json).map_err(js_error)?;
        self.rebuild(config.sections(), config.rows(), config.cols())
    }

    pub fn config_json(&self) -> String {
        self.session.grid().config().to_json()
    }

    // === LAYOUT EDITOR ===

    /// Mask the layout editor should open with (row-major, 1 = present)
    pub fn layout_mask(&self) -> Vec<u8> {
        self.session.grid().editable_mask().to_flat()
    }

    pub fn layout_mask_json(&self) -> String {
        self.session.grid().editable_mask().to_json()
    }

    /// Accept the editor's mask. Must be `rows * total_cols` entries.
    pub fn apply_layout(&mut self, cells: &[u8]) -> Result<(), JsValue> {
        let config = self.session.grid().config();
        let mask = LayoutMask::from_flat(config.rows(), config.total_cols(), cells).map_err(js_error)?;
        self.session.edit_layout(mask).map_err(js_error)?;
        Ok(())
    }

    pub fn apply_layout_json(&mut self, json: String) -> Result<(), JsValue> {
        let mask = LayoutMask::from_json(&json).map_err(js_error)?;
        self.session.edit_layout(mask).map_err(js_error)?;
        Ok(())
    }

    pub fn use_default_layout(&mut self) {
        self.session.use_default_layout();
    }

    // === SELECTION ===

    /// Returns one of the `PICK_*` codes
    pub fn pick_cell(&mut self, row: u32, col: u32) -> u8 {
        match self.session.pick_cell(Coord::new(row, col)) {
            PickOutcome::Ignored => PICK_IGNORED,
            PickOutcome::StartSelected(_) => PICK_START_SELECTED,
            PickOutcome::Measured(measurement) => {
                self.last_ledger_error = match measurement.ledger {
                    LedgerStatus::Recorded(_) => None,
                    LedgerStatus::NotRecorded(e) => {
                        let message = e.to_string();
                        console::warn(&message);
                        Some(message)
                    }
                };
                PICK_MEASURED
            }
            PickOutcome::NotFound(_) => PICK_NOT_FOUND,
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Pending start as `[row, col]`, empty when idle
    pub fn pending_start(&self) -> Vec<u32> {
        self.session
            .pending_start()
            .map(|c| vec![c.row, c.col])
            .unwrap_or_default()
    }

    /// Path to highlight, empty when there is none
    pub fn path_cells(&self) -> Vec<u32> {
        self.session
            .current_path()
            .map(|p| flatten(p.cells()))
            .unwrap_or_default()
    }

    pub fn last_measurement(&self) -> Option<f64> {
        self.session.last_measurement_mm()
    }

    /// `Last measurement: 600.00 mm`, or empty
    pub fn last_measurement_text(&self) -> String {
        self.session
            .last_measurement_mm()
            .map(format_measurement)
            .unwrap_or_default()
    }

    /// Why the last measurement was not recorded, if it was not
    pub fn last_ledger_error(&self) -> Option<String> {
        self.last_ledger_error.clone()
    }

    pub fn search_stats(&self) -> SearchStats {
        self.session.last_search_stats()
    }

    // === LEDGER ===

    /// Attach a JS ledger object. Returns the row the next measurement goes to.
    pub fn attach_ledger(&mut self, ledger: JsValue) -> Result<u32, JsValue> {
        let ledger = JsLedger::new(ledger).map_err(js_error)?;
        let next_row = self.session.attach_ledger(Box::new(ledger)).map_err(js_error)?;
        self.last_ledger_error = None;
        console::log(&format!("ledger attached, next row {next_row}"));
        Ok(next_row)
    }

    pub fn detach_ledger(&mut self) {
        self.session.detach_ledger();
    }

    #[wasm_bindgen(getter)]
    pub fn has_ledger(&self) -> bool {
        self.session.has_ledger()
    }

    /// Clear the newest ledger row, returning it
    pub fn delete_last_measurement(&mut self) -> Result<u32, JsValue> {
        self.session.delete_last_measurement().map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn next_row(&self) -> u32 {
        self.session.next_row()
    }

    /// Ledger description for the next row (`"B - C"`)
    pub fn current_row_label(&self) -> Option<String> {
        self.session.current_row_label()
    }
}

impl Default for MeasuringGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasuringGrid {
    /// Native access to the underlying session.
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }
}
