use crate::pathfinding::SearchStats;
use crate::spatial::grid::{GridConfig, GridModel};

use super::{MeasurementSession, Selection};

pub(super) fn create_session(config: GridConfig) -> MeasurementSession {
    MeasurementSession {
        grid: GridModel::new(config),
        selection: Selection::Idle,
        current_path: None,
        last_distance_mm: None,
        last_search: SearchStats::default(),
        ledger: None,
        // Row 1 until a ledger tells us otherwise
        next_row: 1,
    }
}
