//! Grid Model - sections x rows x cols boxes, filtered by a layout mask
//!
//! Global coordinates run `row in 0..rows`, `col in 0..sections*cols`, with
//! `col = section * cols + local_col`. The layout mask decides which of those
//! coordinates exist; the resulting `ActiveCellSet` is the only thing the path
//! engine reads.
//!
//! Every mutation is atomic: a rejected configuration or mask leaves the
//! previous grid in place.

use tracing::{debug, warn};

use crate::core::Coord;
use crate::error::GridError;

mod active;
mod config;
mod indexing;
mod mask;
mod neighbors;

pub use active::ActiveCellSet;
pub use config::GridConfig;
pub use mask::LayoutMask;

pub struct GridModel {
    config: GridConfig,
    mask: Option<LayoutMask>,
    active: ActiveCellSet,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridModel {
    /// All-active grid for `config`.
    pub fn new(config: GridConfig) -> Self {
        Self {
            active: ActiveCellSet::all_active(&config),
            config,
            mask: None,
        }
    }

    /// Replace the configuration and rebuild the active set.
    ///
    /// A `mask` that does not fit the new dimensions is dropped and the grid
    /// comes up all active.
    pub fn configure(
        &mut self,
        sections: u32,
        rows: u32,
        cols: u32,
        mask: Option<LayoutMask>,
    ) -> Result<&ActiveCellSet, GridError> {
        let config = match GridConfig::new(sections, rows, cols) {
            Ok(config) => config,
            Err(e) => {
                warn!(sections, rows, cols, "rejected grid configuration");
                return Err(e);
            }
        };

        let mask = mask.filter(|m| {
            let fits = m.fits(&config);
            if !fits {
                warn!(
                    mask_rows = m.rows(),
                    mask_cols = m.cols(),
                    "layout mask does not fit new configuration, using all active"
                );
            }
            fits
        });

        self.active = ActiveCellSet::build(&config, mask.as_ref());
        self.config = config;
        self.mask = mask;
        debug!(sections, rows, cols, active = self.active.len(), "grid rebuilt");
        Ok(&self.active)
    }

    /// Swap in a new layout mask under the current configuration.
    pub fn apply_mask(&mut self, mask: LayoutMask) -> Result<&ActiveCellSet, GridError> {
        if !mask.fits(&self.config) {
            warn!(
                mask_rows = mask.rows(),
                mask_cols = mask.cols(),
                rows = self.config.rows(),
                cols = self.config.total_cols(),
                "rejected layout mask"
            );
            return Err(GridError::MaskDimensionMismatch {
                expected_rows: self.config.rows(),
                expected_cols: self.config.total_cols(),
                actual_rows: mask.rows(),
                actual_cols: mask.cols(),
            });
        }

        self.active = ActiveCellSet::build(&self.config, Some(&mask));
        self.mask = Some(mask);
        debug!(active = self.active.len(), "layout mask applied");
        Ok(&self.active)
    }

    /// Back to the default all-active layout.
    pub fn clear_mask(&mut self) -> &ActiveCellSet {
        self.mask = None;
        self.active = ActiveCellSet::all_active(&self.config);
        &self.active
    }

    #[inline]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    #[inline]
    pub fn mask(&self) -> Option<&LayoutMask> {
        self.mask.as_ref()
    }

    #[inline]
    pub fn active(&self) -> &ActiveCellSet {
        &self.active
    }

    #[inline]
    pub fn is_active(&self, coord: Coord) -> bool {
        self.active.contains(coord)
    }

    #[inline]
    pub fn total_cols(&self) -> u32 {
        self.config.total_cols()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.active.neighbors(coord)
    }

    /// Active cells of one section, row-major, for laying out a section panel.
    pub fn cells_in_section(&self, section: u32) -> Vec<Coord> {
        if section >= self.config.sections() {
            return Vec::new();
        }
        let cols = self.config.cols();
        (0..self.config.rows())
            .flat_map(|r| (0..cols).map(move |c| Coord::from_section(r, section, c, cols)))
            .filter(|&coord| self.active.contains(coord))
            .collect()
    }

    /// Mask the layout editor should open with.
    pub fn editable_mask(&self) -> LayoutMask {
        LayoutMask::seeded(self.mask.as_ref(), &self.config)
    }
}
