use super::*;

impl ActiveCellSet {
    /// Active cells at Manhattan distance 1 from `coord`.
    ///
    /// Inactive coordinates do not exist in the adjacency graph, so a masked
    /// box is simply missing here.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.orthogonal().filter(move |n| self.contains(*n))
    }

    /// Same as `neighbors`, in slot indices. Used by the path search.
    pub(crate) fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(self.coord_of(idx))
            .filter_map(move |n| self.index_of(n))
    }
}
