use tracing::{info, warn};

use crate::core::Coord;
use crate::domain::ledger::RowIndex;
use crate::error::LedgerError;
use crate::pathfinding;

use super::settings::refresh_next_row;
use super::{LedgerStatus, Measurement, MeasurementSession, PickOutcome, Selection};

pub(super) fn pick_cell(session: &mut MeasurementSession, coord: Coord) -> PickOutcome {
    if !session.grid.is_active(coord) {
        return PickOutcome::Ignored;
    }

    match session.selection {
        Selection::Idle => {
            // New pair: the previous highlight goes away
            session.current_path = None;
            session.selection = Selection::AwaitingEnd(coord);
            PickOutcome::StartSelected(coord)
        }
        Selection::AwaitingEnd(start) if start == coord => PickOutcome::Ignored,
        Selection::AwaitingEnd(start) => {
            session.selection = Selection::Idle;
            match pathfinding::search(start, coord, session.grid.active()) {
                Ok(found) => {
                    session.last_search = found.stats;
                    session.current_path = Some(found.path.clone());
                    session.last_distance_mm = Some(f64::from(found.distance_mm));
                    let ledger = record(session, found.distance_mm);
                    PickOutcome::Measured(Measurement {
                        path: found.path,
                        distance_mm: found.distance_mm,
                        ledger,
                    })
                }
                Err(e) => {
                    info!(%start, end = %coord, "no route between picked cells");
                    session.current_path = None;
                    PickOutcome::NotFound(e)
                }
            }
        }
    }
}

/// Hand the distance to the ledger exactly once. Failures are reported, not retried.
fn record(session: &mut MeasurementSession, distance_mm: u32) -> LedgerStatus {
    let Some(ledger) = session.ledger.as_mut() else {
        warn!(distance_mm, "measurement not recorded: no ledger attached");
        return LedgerStatus::NotRecorded(LedgerError::Detached);
    };

    match ledger.append_measurement(f64::from(distance_mm)) {
        Ok(row) => {
            info!(distance_mm, row, "measurement recorded");
            refresh_next_row(session, row.saturating_add(1));
            LedgerStatus::Recorded(row)
        }
        Err(e) => {
            warn!(distance_mm, error = %e, "measurement not recorded");
            LedgerStatus::NotRecorded(e)
        }
    }
}

pub(super) fn reset(session: &mut MeasurementSession) {
    session.selection = Selection::Idle;
    session.current_path = None;
}

pub(super) fn delete_last_measurement(session: &mut MeasurementSession) -> Result<RowIndex, LedgerError> {
    let ledger = session.ledger.as_mut().ok_or(LedgerError::Detached)?;

    let Some(last) = ledger.last_used_row()? else {
        session.last_distance_mm = None;
        session.reset();
        return Err(LedgerError::Empty);
    };

    ledger.delete_row(last)?;
    info!(row = last, "measurement deleted");

    let previous = match ledger.last_used_row()? {
        Some(row) => ledger.measurement_at(row)?,
        None => None,
    };
    if previous.is_none() {
        session.reset();
    }
    session.last_distance_mm = previous;
    refresh_next_row(session, last);
    Ok(last)
}
