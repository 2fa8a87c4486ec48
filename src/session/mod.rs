//! Measurement Session - selection state machine over the measuring grid
//!
//! Owns the grid model, the pending selection, the current path and the
//! ledger hand-off. Everything runs to completion on the caller's thread.
//!
//! - commands/  - cell picks and reset
//! - topology/  - rebuilds and layout edits, path re-validation
//! - init/      - construction and ledger wiring

use tracing::warn;

use crate::core::Coord;
use crate::domain::ledger::{Ledger, RowIndex};
use crate::error::{GridError, LedgerError, PathError};
use crate::pathfinding::{Path, SearchStats};
use crate::spatial::grid::{ActiveCellSet, GridConfig, GridModel, LayoutMask};

#[path = "commands/commands.rs"]
mod commands;
#[path = "topology/topology.rs"]
mod topology;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;
mod js_ledger;

pub use facade::{
    MeasuringGrid, PICK_IGNORED, PICK_MEASURED, PICK_NOT_FOUND, PICK_START_SELECTED,
};
pub use js_ledger::JsLedger;

/// Where the session is in a start/end pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    AwaitingEnd(Coord),
}

/// What happened to a measurement on its way to the ledger.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerStatus {
    Recorded(RowIndex),
    /// Computed but not written; includes `LedgerError::Detached`.
    NotRecorded(LedgerError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub path: Path,
    pub distance_mm: u32,
    pub ledger: LedgerStatus,
}

impl Measurement {
    pub fn is_recorded(&self) -> bool {
        matches!(self.ledger, LedgerStatus::Recorded(_))
    }
}

/// Result of `MeasurementSession::pick_cell`.
#[derive(Clone, Debug, PartialEq)]
pub enum PickOutcome {
    /// Inactive cell, or the pending start picked again. State unchanged.
    Ignored,
    StartSelected(Coord),
    Measured(Measurement),
    /// No route; selection went back to idle and nothing was recorded.
    NotFound(PathError),
}

/// `Last measurement: 600.00 mm`
pub fn format_measurement(distance_mm: f64) -> String {
    format!("Last measurement: {distance_mm:.2} mm")
}

pub struct MeasurementSession {
    grid: GridModel,
    selection: Selection,
    current_path: Option<Path>,
    last_distance_mm: Option<f64>,
    last_search: SearchStats,
    ledger: Option<Box<dyn Ledger>>,
    next_row: RowIndex,
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl MeasurementSession {
    pub fn new(config: GridConfig) -> Self {
        init::create_session(config)
    }

    /// Validated constructor from raw dimensions.
    pub fn with_dimensions(sections: u32, rows: u32, cols: u32) -> Result<Self, GridError> {
        Ok(Self::new(GridConfig::new(sections, rows, cols)?))
    }

    #[inline]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[inline]
    pub fn active(&self) -> &ActiveCellSet {
        self.grid.active()
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending_start(&self) -> Option<Coord> {
        match self.selection {
            Selection::Idle => None,
            Selection::AwaitingEnd(start) => Some(start),
        }
    }

    /// Path to highlight, if any.
    #[inline]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_ref()
    }

    #[inline]
    pub fn last_measurement_mm(&self) -> Option<f64> {
        self.last_distance_mm
    }

    #[inline]
    pub fn last_search_stats(&self) -> SearchStats {
        self.last_search
    }

    /// Row the next measurement will land in.
    #[inline]
    pub fn next_row(&self) -> RowIndex {
        self.next_row
    }

    // === Selection ===

    pub fn pick_cell(&mut self, coord: Coord) -> PickOutcome {
        commands::pick_cell(self, coord)
    }

    /// Drop the pending selection and the current path.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === Topology ===

    /// Re-check the current path against the grid after it changed.
    /// Clears any pending selection. Returns the path if it survived.
    pub fn on_topology_changed(&mut self) -> Option<&Path> {
        topology::on_topology_changed(self)
    }

    /// New dimensions, default layout. A different configuration always
    /// drops the current path.
    pub fn rebuild(&mut self, sections: u32, rows: u32, cols: u32) -> Result<&ActiveCellSet, GridError> {
        topology::rebuild(self, sections, rows, cols)
    }

    /// Accept a mask from the layout editor.
    pub fn edit_layout(&mut self, mask: LayoutMask) -> Result<&ActiveCellSet, GridError> {
        topology::edit_layout(self, mask)
    }

    pub fn use_default_layout(&mut self) -> &ActiveCellSet {
        topology::use_default_layout(self)
    }

    // === Ledger ===

    /// Wire up a ledger. Returns the row the next measurement will land in.
    pub fn attach_ledger(&mut self, ledger: Box<dyn Ledger>) -> Result<RowIndex, LedgerError> {
        settings::attach_ledger(self, ledger)
    }

    pub fn detach_ledger(&mut self) -> Option<Box<dyn Ledger>> {
        settings::detach_ledger(self)
    }

    #[inline]
    pub fn has_ledger(&self) -> bool {
        self.ledger.is_some()
    }

    /// Clear the newest ledger row. Returns the row that was cleared.
    pub fn delete_last_measurement(&mut self) -> Result<RowIndex, LedgerError> {
        commands::delete_last_measurement(self)
    }

    /// Ledger description of the row the next measurement will land in.
    pub fn current_row_label(&self) -> Option<String> {
        let ledger = self.ledger.as_ref()?;
        match ledger.row_label(self.next_row) {
            Ok(label) => label,
            Err(e) => {
                warn!(row = self.next_row, error = %e, "could not read ledger row label");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
