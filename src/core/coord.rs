use serde::{Deserialize, Serialize};

/// Global cell coordinate on the measuring grid.
///
/// `col` is the global column: `section * cols_per_section + local_col`.
/// The presentation layer keys its widgets by this value; the engine never
/// holds anything else about a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Coordinate of `local_col` inside section `section`.
    #[inline]
    pub fn from_section(row: u32, section: u32, local_col: u32, cols_per_section: u32) -> Self {
        Self::new(row, section * cols_per_section + local_col)
    }

    #[inline]
    pub fn section(self, cols_per_section: u32) -> u32 {
        self.col / cols_per_section
    }

    #[inline]
    pub fn local_col(self, cols_per_section: u32) -> u32 {
        self.col % cols_per_section
    }

    /// Manhattan distance between two coordinates.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbours that do not underflow, in up/down/left/right order.
    pub fn orthogonal(self) -> impl Iterator<Item = Coord> {
        const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Coord::new(row, col))
        })
    }

    /// Human readable label, 1-based section like the panel drawings.
    pub fn label(self, cols_per_section: u32) -> String {
        format!(
            "Cell ({}, {}) in section {}",
            self.row,
            self.local_col(cols_per_section),
            self.section(cols_per_section) + 1
        )
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
