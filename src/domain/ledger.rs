//! Ledger - where measurements are written down
//!
//! Row oriented, 1-based, like the spreadsheet the operators keep: column A
//! holds the distance, columns B and C describe what was measured. The first
//! row with an empty column A is where the next measurement lands.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// 1-based ledger row.
pub type RowIndex = u32;

/// External store for recorded measurements.
///
/// Calls are synchronous from the engine's point of view; a failure is
/// reported back but never rolls back engine state.
pub trait Ledger {
    /// Write `distance_mm` into the first unused row and return that row.
    fn append_measurement(&mut self, distance_mm: f64) -> Result<RowIndex, LedgerError>;

    fn find_first_unused_row(&self) -> Result<RowIndex, LedgerError>;

    /// Clear the measurement held in `row`.
    fn delete_row(&mut self, row: RowIndex) -> Result<(), LedgerError>;

    /// Row of the most recent measurement, the one just above the first unused row.
    fn last_used_row(&self) -> Result<Option<RowIndex>, LedgerError> {
        let first = self.find_first_unused_row()?;
        Ok((first > 1).then(|| first - 1))
    }

    fn measurement_at(&self, _row: RowIndex) -> Result<Option<f64>, LedgerError> {
        Ok(None)
    }

    /// Description of what `row` is for (`"B - C"`), if the ledger has one.
    fn row_label(&self, _row: RowIndex) -> Result<Option<String>, LedgerError> {
        Ok(None)
    }
}

/// Shared handle, so the host keeps reading a ledger the session writes to.
impl<L: Ledger> Ledger for Rc<RefCell<L>> {
    fn append_measurement(&mut self, distance_mm: f64) -> Result<RowIndex, LedgerError> {
        self.borrow_mut().append_measurement(distance_mm)
    }

    fn find_first_unused_row(&self) -> Result<RowIndex, LedgerError> {
        self.borrow().find_first_unused_row()
    }

    fn delete_row(&mut self, row: RowIndex) -> Result<(), LedgerError> {
        self.borrow_mut().delete_row(row)
    }

    fn last_used_row(&self) -> Result<Option<RowIndex>, LedgerError> {
        self.borrow().last_used_row()
    }

    fn measurement_at(&self, row: RowIndex) -> Result<Option<f64>, LedgerError> {
        self.borrow().measurement_at(row)
    }

    fn row_label(&self, row: RowIndex) -> Result<Option<String>, LedgerError> {
        self.borrow().row_label(row)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LedgerRow {
    fn label(&self) -> Option<String> {
        let item = self.item.as_deref().unwrap_or("");
        let note = self.note.as_deref().unwrap_or("");
        if item.is_empty() && note.is_empty() {
            return None;
        }
        Some(format!("{item} - {note}").trim().to_string())
    }
}

/// In-memory ledger with a JSON snapshot format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryLedger {
    rows: Vec<LedgerRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_rows: Option<u32>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-filled with `(item, note)` descriptions, one per row.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let rows = labels
            .into_iter()
            .map(|(item, note)| LedgerRow {
                distance_mm: None,
                item: Some(item.into()),
                note: Some(note.into()),
            })
            .collect();
        Self { rows, max_rows: None }
    }

    /// Refuse writes past `max_rows`.
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(json).map_err(|e| LedgerError::Backend(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Recorded distances in row order, skipping cleared rows.
    pub fn measurements(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.distance_mm).collect()
    }

    fn row(&self, row: RowIndex) -> Option<&LedgerRow> {
        let idx = (row as usize).checked_sub(1)?;
        self.rows.get(idx)
    }

    fn first_unused(&self) -> RowIndex {
        let idx = self
            .rows
            .iter()
            .position(|r| r.distance_mm.is_none())
            .unwrap_or(self.rows.len());
        idx as RowIndex + 1
    }
}

impl Ledger for MemoryLedger {
    fn append_measurement(&mut self, distance_mm: f64) -> Result<RowIndex, LedgerError> {
        let row = self.first_unused();
        if self.max_rows.is_some_and(|max| row > max) {
            return Err(LedgerError::Write {
                row,
                message: "sheet is full".to_string(),
            });
        }
        let idx = (row - 1) as usize;
        if idx == self.rows.len() {
            self.rows.push(LedgerRow::default());
        }
        self.rows[idx].distance_mm = Some(distance_mm);
        Ok(row)
    }

    fn find_first_unused_row(&self) -> Result<RowIndex, LedgerError> {
        Ok(self.first_unused())
    }

    fn delete_row(&mut self, row: RowIndex) -> Result<(), LedgerError> {
        let idx = (row as usize)
            .checked_sub(1)
            .filter(|&i| i < self.rows.len() && self.rows[i].distance_mm.is_some())
            .ok_or(LedgerError::NoSuchRow(row))?;
        self.rows[idx].distance_mm = None;
        Ok(())
    }

    fn measurement_at(&self, row: RowIndex) -> Result<Option<f64>, LedgerError> {
        Ok(self.row(row).and_then(|r| r.distance_mm))
    }

    fn row_label(&self, row: RowIndex) -> Result<Option<String>, LedgerError> {
        Ok(self.row(row).and_then(LedgerRow::label))
    }
}
