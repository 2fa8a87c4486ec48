use crate::core::Coord;

use super::{GridConfig, LayoutMask};

/// Active Cell Set - dense bitmap over every global coordinate.
///
/// Rebuilt from scratch on every configuration or mask change, never patched.
/// Two sets compare equal when they cover the same grid and the same cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveCellSet {
    pub(super) rows: u32,
    pub(super) cols: u32,
    pub(super) active: Vec<bool>,
    pub(super) count: usize,
}

impl ActiveCellSet {
    /// Build the set for `config`. `mask` must already fit `config`; the
    /// grid model drops masks that do not.
    pub(super) fn build(config: &GridConfig, mask: Option<&LayoutMask>) -> Self {
        let rows = config.rows();
        let cols = config.total_cols();
        let mut active = vec![false; config.cell_count()];
        let mut count = 0;

        for r in 0..rows {
            for s in 0..config.sections() {
                for c in 0..config.cols() {
                    let coord = Coord::from_section(r, s, c, config.cols());
                    if mask.map_or(true, |m| m.is_active(coord)) {
                        fast!(active, [(r * cols + coord.col) as usize] = true);
                        count += 1;
                    }
                }
            }
        }

        Self { rows, cols, active, count }
    }

    /// Every cell of `config` active.
    pub fn all_active(config: &GridConfig) -> Self {
        Self::build(config, None)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(idx) => *fast!(self.active, [idx]),
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Active coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(idx, _)| self.coord_of(idx))
    }
}
