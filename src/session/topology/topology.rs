use tracing::debug;

use crate::error::GridError;
use crate::pathfinding::Path;
use crate::spatial::grid::{ActiveCellSet, LayoutMask};

use super::{MeasurementSession, Selection};

pub(super) fn on_topology_changed(session: &mut MeasurementSession) -> Option<&Path> {
    session.selection = Selection::Idle;

    let still_valid = session
        .current_path
        .as_ref()
        .is_some_and(|path| path.is_valid_in(session.grid.active()));
    if !still_valid && session.current_path.take().is_some() {
        debug!("current path no longer fits the grid, discarded");
    }
    session.current_path.as_ref()
}

pub(super) fn rebuild(
    session: &mut MeasurementSession,
    sections: u32,
    rows: u32,
    cols: u32,
) -> Result<&ActiveCellSet, GridError> {
    let previous = session.grid.config();
    session.grid.configure(sections, rows, cols, None)?;

    if session.grid.config() != previous {
        session.current_path = None;
    }
    on_topology_changed(session);
    Ok(session.grid.active())
}

pub(super) fn edit_layout(
    session: &mut MeasurementSession,
    mask: LayoutMask,
) -> Result<&ActiveCellSet, GridError> {
    session.grid.apply_mask(mask)?;
    on_topology_changed(session);
    Ok(session.grid.active())
}

pub(super) fn use_default_layout(session: &mut MeasurementSession) -> &ActiveCellSet {
    session.grid.clear_mask();
    on_topology_changed(session);
    session.grid.active()
}
