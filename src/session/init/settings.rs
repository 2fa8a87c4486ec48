use tracing::{info, warn};

use crate::domain::ledger::{Ledger, RowIndex};
use crate::error::LedgerError;

use super::MeasurementSession;

pub(super) fn attach_ledger(
    session: &mut MeasurementSession,
    ledger: Box<dyn Ledger>,
) -> Result<RowIndex, LedgerError> {
    let next_row = ledger.find_first_unused_row()?;
    let last = match ledger.last_used_row()? {
        Some(row) => ledger.measurement_at(row)?,
        None => None,
    };

    session.ledger = Some(ledger);
    session.next_row = next_row;
    session.last_distance_mm = last;
    session.reset();
    info!(next_row, "ledger attached");
    Ok(next_row)
}

pub(super) fn detach_ledger(session: &mut MeasurementSession) -> Option<Box<dyn Ledger>> {
    let ledger = session.ledger.take();
    session.next_row = 1;
    ledger
}

/// Re-read where the next measurement goes. Falls back to `fallback` when
/// the ledger cannot answer.
pub(super) fn refresh_next_row(session: &mut MeasurementSession, fallback: RowIndex) {
    let Some(ledger) = session.ledger.as_ref() else {
        return;
    };
    session.next_row = match ledger.find_first_unused_row() {
        Ok(row) => row,
        Err(e) => {
            warn!(error = %e, fallback, "ledger could not report first unused row");
            fallback
        }
    };
}
