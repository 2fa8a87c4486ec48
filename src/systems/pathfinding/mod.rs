//! Path Engine - cheapest run of boxes between two active cells
//!
//! Dijkstra over the active cell set with 4-directional adjacency and fixed
//! costs, all in millimetres:
//! - the start is seeded with `START_COST`,
//! - entering an intermediate box costs `HOP_COST`,
//! - the end gets `END_COST` once, when it is popped as the current minimum.
//!
//! The final step into the end box carries no hop cost; the lead-out covers
//! it. That way the settled cost of the end node is exactly
//! `total_distance(path)` for the reconstructed path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Coord, END_COST, HOP_COST, START_COST};
use crate::error::PathError;
use crate::spatial::grid::ActiveCellSet;

mod frontier;
mod search_stats;

use frontier::Frontier;

pub use search_stats::SearchStats;

const UNREACHED: u32 = u32::MAX;

/// Ordered run of 4-adjacent cells, start and end inclusive. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PathJson")]
pub struct Path {
    cells: Vec<Coord>,
}

#[derive(Deserialize)]
struct PathJson {
    cells: Vec<Coord>,
}

impl TryFrom<PathJson> for Path {
    type Error = String;

    fn try_from(json: PathJson) -> Result<Self, Self::Error> {
        let len = json.cells.len();
        Path::new(json.cells)
            .ok_or_else(|| format!("not a run of adjacent cells ({len} cells)"))
    }
}

impl Path {
    /// `None` for an empty run or one with a non-adjacent step.
    pub fn new(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() || cells.windows(2).any(|w| w[0].manhattan(w[1]) != 1) {
            return None;
        }
        Some(Self { cells })
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a constructed path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Still usable under `active`: every cell must still exist.
    pub fn is_valid_in(&self, active: &ActiveCellSet) -> bool {
        self.cells.iter().all(|&c| active.contains(c))
    }

    pub fn distance_mm(&self) -> u32 {
        total_distance(self)
    }
}

/// Physical length of a run of `len` boxes.
#[inline]
pub const fn distance_for_len(len: usize) -> u32 {
    let intermediate = len.saturating_sub(2) as u32;
    START_COST + END_COST + intermediate * HOP_COST
}

/// `START_COST + END_COST + max(0, len - 2) * HOP_COST`; 400 for a single box.
pub fn total_distance(path: &Path) -> u32 {
    distance_for_len(path.len())
}

/// Result of a successful search.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSearch {
    pub path: Path,
    /// Cost accumulated by the search itself.
    pub distance_mm: u32,
    pub stats: SearchStats,
}

/// Shortest path from `start` to `end` through `active`.
pub fn shortest_path(start: Coord, end: Coord, active: &ActiveCellSet) -> Result<Path, PathError> {
    search(start, end, active).map(|found| found.path)
}

/// Shortest path plus the search's own cost and counters.
pub fn search(start: Coord, end: Coord, active: &ActiveCellSet) -> Result<PathSearch, PathError> {
    let started_ms = search_stats::clock_ms();
    let not_found = || PathError::NotFound { start, end };

    if !active.contains(start) || !active.contains(end) {
        return Err(not_found());
    }
    let (Some(s), Some(e)) = (active.index_of(start), active.index_of(end)) else {
        return Err(not_found());
    };

    let slots = active.slot_count();
    let mut cost = vec![UNREACHED; slots];
    let mut prev: Vec<Option<usize>> = vec![None; slots];
    let mut settled = vec![false; slots];
    let mut frontier = Frontier::with_capacity(active.len());
    let mut stats = SearchStats::default();

    fast!(cost, [s] = START_COST);
    frontier.push(START_COST, s);

    while let Some((current, u)) = frontier.pop() {
        if *fast!(settled, [u]) || current > *fast!(cost, [u]) {
            stats.stale_pops += 1;
            continue;
        }
        fast!(settled, [u] = true);
        stats.settled += 1;

        if u == e {
            let distance_mm = current + END_COST;
            let path = reconstruct(&prev, e, active);
            debug_assert_eq!(distance_mm, total_distance(&path));

            stats.finish(&frontier, started_ms);
            debug!(%start, %end, distance_mm, settled = stats.settled, "path found");
            return Ok(PathSearch { path, distance_mm, stats });
        }

        for v in active.neighbor_indices(u) {
            if *fast!(settled, [v]) {
                continue;
            }
            let step = if v == e { 0 } else { HOP_COST };
            let alt = current + step;
            if alt < *fast!(cost, [v]) {
                fast!(cost, [v] = alt);
                fast!(prev, [v] = Some(u));
                frontier.push(alt, v);
                stats.relaxations += 1;
            }
        }
    }

    debug!(%start, %end, settled = stats.settled, "no path");
    Err(not_found())
}

/// Walk predecessor links back from `end` and reverse.
fn reconstruct(prev: &[Option<usize>], end: usize, active: &ActiveCellSet) -> Path {
    let mut cells = vec![active.coord_of(end)];
    let mut cursor = end;
    while let Some(p) = prev[cursor] {
        cells.push(active.coord_of(p));
        cursor = p;
    }
    cells.reverse();
    Path { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::grid::{GridConfig, GridModel, LayoutMask};

    fn model(sections: u32, rows: u32, cols: u32) -> GridModel {
        GridModel::new(GridConfig::new(sections, rows, cols).unwrap())
    }

    #[test]
    fn straight_run_in_one_section() {
        let g = model(5, 7, 4);
        let found = search(Coord::new(0, 0), Coord::new(0, 3), g.active()).unwrap();
        assert_eq!(found.path.len(), 4);
        assert_eq!(found.distance_mm, 600);
        assert_eq!(found.path.distance_mm(), 600);
        assert_eq!(found.path.start(), Coord::new(0, 0));
        assert_eq!(found.path.end(), Coord::new(0, 3));
    }

    #[test]
    fn adjacent_cells_cost_only_the_anchors() {
        let g = model(1, 2, 2);
        let found = search(Coord::new(0, 0), Coord::new(1, 0), g.active()).unwrap();
        assert_eq!(found.path.len(), 2);
        assert_eq!(found.distance_mm, 400);
    }

    #[test]
    fn same_cell_is_a_degenerate_path() {
        let g = model(1, 1, 1);
        let found = search(Coord::new(0, 0), Coord::new(0, 0), g.active()).unwrap();
        assert_eq!(found.path.cells(), &[Coord::new(0, 0)]);
        assert_eq!(found.distance_mm, 400);
        assert_eq!(total_distance(&found.path), 400);
    }

    #[test]
    fn path_length_is_manhattan_on_open_grid() {
        let g = model(3, 5, 3);
        let start = Coord::new(0, 0);
        for end in g.active().iter() {
            let found = search(start, end, g.active()).unwrap();
            assert_eq!(found.path.len() as u32, start.manhattan(end) + 1);
            assert_eq!(found.distance_mm, total_distance(&found.path));
        }
    }

    #[test]
    fn detours_around_masked_cells() {
        let mut g = model(1, 3, 3);
        let mut mask = g.editable_mask();
        mask.set(Coord::new(0, 1), false);
        mask.set(Coord::new(1, 1), false);
        g.apply_mask(mask).unwrap();

        let found = search(Coord::new(0, 0), Coord::new(0, 2), g.active()).unwrap();
        // down, down, right, right, up, up
        assert_eq!(found.path.len(), 7);
        assert_eq!(found.distance_mm, 900);
        assert!(found.path.is_valid_in(g.active()));
        assert!(!found.path.contains(Coord::new(1, 1)));
    }

    #[test]
    fn masked_column_disconnects() {
        let mut g = model(5, 7, 4);
        let mut mask = g.editable_mask();
        for r in 0..7 {
            mask.set(Coord::new(r, 2), false);
        }
        g.apply_mask(mask).unwrap();

        let err = shortest_path(Coord::new(3, 0), Coord::new(3, 4), g.active()).unwrap_err();
        assert_eq!(
            err,
            PathError::NotFound { start: Coord::new(3, 0), end: Coord::new(3, 4) }
        );
    }

    #[test]
    fn masked_row_disconnects() {
        let mut g = model(2, 3, 2);
        let mut mask = LayoutMask::all_active(3, 4);
        for c in 0..4 {
            mask.set(Coord::new(1, c), false);
        }
        g.apply_mask(mask).unwrap();
        assert!(shortest_path(Coord::new(0, 0), Coord::new(2, 3), g.active()).is_err());
        assert!(shortest_path(Coord::new(0, 0), Coord::new(0, 3), g.active()).is_ok());
    }

    #[test]
    fn inactive_endpoints_are_not_found() {
        let mut g = model(1, 2, 2);
        let mut mask = g.editable_mask();
        mask.set(Coord::new(1, 1), false);
        g.apply_mask(mask).unwrap();
        assert!(shortest_path(Coord::new(0, 0), Coord::new(1, 1), g.active()).is_err());
        assert!(shortest_path(Coord::new(9, 9), Coord::new(0, 0), g.active()).is_err());
    }

    #[test]
    fn stats_are_filled() {
        let g = model(2, 4, 4);
        let found = search(Coord::new(0, 0), Coord::new(3, 7), g.active()).unwrap();
        assert!(found.stats.settled() >= found.path.len() as u32);
        assert!(found.stats.pushes() >= found.stats.settled());
        assert!(found.stats.frontier_peak() >= 1);
        assert!(found.stats.search_ms() >= 0.0);
    }

    #[test]
    fn path_new_rejects_gaps() {
        assert!(Path::new(vec![]).is_none());
        assert!(Path::new(vec![Coord::new(0, 0), Coord::new(1, 1)]).is_none());
        let p = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        assert_eq!(p.distance_mm(), 500);
    }

    #[test]
    fn json_paths_are_checked_like_new() {
        assert!(serde_json::from_str::<Path>(r#"{"cells":[]}"#).is_err());
        let gapped = r#"{"cells":[{"row":0,"col":0},{"row":5,"col":5}]}"#;
        assert!(serde_json::from_str::<Path>(gapped).is_err());

        let p = Path::new(vec![Coord::new(0, 0), Coord::new(1, 0)]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"cells":[{"row":0,"col":0},{"row":1,"col":0}]}"#);
        assert_eq!(serde_json::from_str::<Path>(&json).unwrap(), p);
    }

    #[test]
    fn distance_closed_form() {
        assert_eq!(distance_for_len(1), 400);
        assert_eq!(distance_for_len(2), 400);
        assert_eq!(distance_for_len(3), 500);
        assert_eq!(distance_for_len(10), 1200);
    }
}
