use std::cell::RefCell;
use std::rc::Rc;

use panelgrid_engine::{
    Coord, LayoutMask, LedgerStatus, MeasurementSession, MeasuringGrid, MemoryLedger,
    PickOutcome,
};
use panelgrid_engine::session::{PICK_IGNORED, PICK_MEASURED, PICK_NOT_FOUND, PICK_START_SELECTED};

#[test]
fn facade_measures_default_panel() {
    let mut grid = MeasuringGrid::new();
    assert_eq!(grid.total_cols(), 20);
    assert_eq!(grid.active_count(), 140);

    assert_eq!(grid.pick_cell(0, 0), PICK_START_SELECTED);
    assert_eq!(grid.pending_start(), vec![0, 0]);
    assert_eq!(grid.pick_cell(0, 3), PICK_MEASURED);
    assert_eq!(grid.path_cells(), vec![0, 0, 0, 1, 0, 2, 0, 3]);
    assert_eq!(grid.last_measurement(), Some(600.0));
    assert_eq!(grid.last_measurement_text(), "Last measurement: 600.00 mm");
    assert!(grid.pending_start().is_empty());
    assert!(grid.last_ledger_error().is_some());
}

#[test]
fn facade_layout_round_trip() {
    let mut grid = MeasuringGrid::with_dimensions(2, 2, 2).unwrap();
    let mut cells = grid.layout_mask();
    assert_eq!(cells.len(), 8);

    // row 0, global col 1
    cells[1] = 0;
    grid.apply_layout(&cells).unwrap();
    assert!(!grid.is_active(0, 1));
    assert_eq!(grid.pick_cell(0, 1), PICK_IGNORED);
    assert_eq!(grid.layout_mask(), cells);

    // column 1 fully gone splits the panel
    cells[5] = 0;
    grid.apply_layout(&cells).unwrap();
    grid.pick_cell(0, 0);
    assert_eq!(grid.pick_cell(1, 3), PICK_NOT_FOUND);
    assert!(grid.path_cells().is_empty());

    grid.use_default_layout();
    assert_eq!(grid.active_count(), 8);
    assert_eq!(grid.cell_label(1, 3), "Cell (1, 1) in section 2");
    assert_eq!(grid.section_cells(1), vec![0, 2, 0, 3, 1, 2, 1, 3]);
}

#[test]
fn facade_rebuild_from_json() {
    let mut grid = MeasuringGrid::new();
    grid.pick_cell(0, 0);
    grid.pick_cell(0, 1);
    assert!(!grid.path_cells().is_empty());

    grid.load_config_json(r#"{"sections":1,"rows":3,"cols":3}"#.to_string()).unwrap();
    assert_eq!((grid.sections(), grid.rows(), grid.cols()), (1, 3, 3));
    assert!(grid.path_cells().is_empty());
    assert_eq!(grid.config_json(), r#"{"sections":1,"rows":3,"cols":3}"#);
}

#[test]
fn session_feeds_shared_ledger() {
    let ledger = Rc::new(RefCell::new(MemoryLedger::with_labels([
        ("K1", "relay"),
        ("K2", "fuse"),
    ])));
    let mut session = MeasurementSession::default();
    assert_eq!(session.attach_ledger(Box::new(ledger.clone())), Ok(1));
    assert_eq!(session.current_row_label().as_deref(), Some("K1 - relay"));

    let picks = [((0, 0), (0, 3)), ((0, 0), (4, 0)), ((6, 19), (6, 19))];
    let mut recorded = Vec::new();
    for (start, end) in picks {
        session.pick_cell(Coord::from(start));
        if let PickOutcome::Measured(m) = session.pick_cell(Coord::from(end)) {
            recorded.push(m.ledger);
        }
    }

    // The self-pick never produced a measurement
    assert_eq!(
        recorded,
        vec![LedgerStatus::Recorded(1), LedgerStatus::Recorded(2)]
    );
    assert_eq!(ledger.borrow().measurements(), vec![600.0, 700.0]);
    assert_eq!(session.next_row(), 3);
    assert_eq!(session.pending_start(), Some(Coord::new(6, 19)));
}

#[test]
fn rejected_layout_keeps_grid() {
    let mut session = MeasurementSession::with_dimensions(1, 2, 2).unwrap();
    assert!(session.edit_layout(LayoutMask::all_active(3, 2)).is_err());
    assert_eq!(session.active().len(), 4);
}
