use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::error::GridError;

use super::GridConfig;

/// Layout mask - one flag per global coordinate, `true` = box present.
///
/// Stored flat, row-major, `rows * cols` entries where `cols` is the
/// global column count (sections * cols per section).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaskJson", into = "MaskJson")]
pub struct LayoutMask {
    rows: u32,
    cols: u32,
    cells: Vec<bool>,
}

/// Wire form used by the layout editor: nested rows.
#[derive(Serialize, Deserialize)]
struct MaskJson {
    rows: u32,
    cols: u32,
    cells: Vec<Vec<bool>>,
}

impl TryFrom<MaskJson> for LayoutMask {
    type Error = GridError;

    fn try_from(json: MaskJson) -> Result<Self, Self::Error> {
        let mask = LayoutMask::from_rows(json.cells)?;
        if mask.rows != json.rows || mask.cols != json.cols {
            return Err(GridError::MaskDimensionMismatch {
                expected_rows: json.rows,
                expected_cols: json.cols,
                actual_rows: mask.rows,
                actual_cols: mask.cols,
            });
        }
        Ok(mask)
    }
}

impl From<LayoutMask> for MaskJson {
    fn from(mask: LayoutMask) -> Self {
        let cells = mask.to_rows();
        MaskJson {
            rows: mask.rows,
            cols: mask.cols,
            cells,
        }
    }
}

impl LayoutMask {
    pub fn all_active(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![true; (rows * cols) as usize],
        }
    }

    /// Mask covering every cell of `config`.
    pub fn for_config(config: &GridConfig) -> Self {
        Self::all_active(config.rows(), config.total_cols())
    }

    /// Starting point for a layout edit: a copy of `existing` if it still fits
    /// `config`, otherwise all active.
    pub fn seeded(existing: Option<&LayoutMask>, config: &GridConfig) -> Self {
        match existing {
            Some(mask) if mask.fits(config) => mask.clone(),
            _ => Self::for_config(config),
        }
    }

    /// Build from nested rows. Ragged input is a dimension mismatch.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let row_count = rows.len() as u32;
        let col_count = rows.first().map_or(0, |r| r.len()) as u32;
        let mut cells = Vec::with_capacity((row_count * col_count) as usize);
        for row in rows {
            if row.len() as u32 != col_count {
                return Err(GridError::MaskDimensionMismatch {
                    expected_rows: row_count,
                    expected_cols: col_count,
                    actual_rows: row_count,
                    actual_cols: row.len() as u32,
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Build from a flat row-major byte buffer (non-zero = active), as handed
    /// over from JS as a `Uint8Array`.
    pub fn from_flat(rows: u32, cols: u32, data: &[u8]) -> Result<Self, GridError> {
        let expected = (rows * cols) as usize;
        if data.len() != expected {
            return Err(GridError::MaskDimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual_rows: if cols == 0 { 0 } else { data.len() as u32 / cols },
                actual_cols: cols,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: data.iter().map(|&b| b != 0).collect(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// True when the mask has exactly the `rows x (sections * cols)` shape of `config`.
    pub fn fits(&self, config: &GridConfig) -> bool {
        self.rows == config.rows() && self.cols == config.total_cols()
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| (coord.row * self.cols + coord.col) as usize)
    }

    /// Out-of-range coordinates read as inactive.
    pub fn is_active(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.cells[i])
    }

    /// Returns false when `coord` is outside the mask.
    pub fn set(&mut self, coord: Coord, active: bool) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = active;
                true
            }
            None => false,
        }
    }

    /// Flip one cell, returning its new state (`None` when out of range).
    pub fn toggle(&mut self, coord: Coord) -> Option<bool> {
        let i = self.index(coord)?;
        self.cells[i] = !self.cells[i];
        Some(self.cells[i])
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn to_flat(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}
