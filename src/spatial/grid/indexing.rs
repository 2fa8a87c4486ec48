use super::*;

impl ActiveCellSet {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    /// Global column count.
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    /// Number of addressable slots, active or not.
    #[inline]
    pub fn slot_count(&self) -> usize { self.active.len() }

    // === Index conversion ===
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| (coord.row * self.cols + coord.col) as usize)
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        debug_assert!(
            idx < self.active.len(),
            "coord_of: index {} out of range for {}x{} grid",
            idx,
            self.rows,
            self.cols
        );
        let idx = idx as u32;
        Coord::new(idx / self.cols, idx % self.cols)
    }
}
