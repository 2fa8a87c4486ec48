//! Facade error paths need a real JS host.
#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Object, Reflect};
use panelgrid_engine::session::PICK_MEASURED;
use panelgrid_engine::MeasuringGrid;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js_ledger() -> JsValue {
    let ledger = Object::new();
    let methods = [
        ("rows", None),
        (
            "appendMeasurement",
            Some(Function::new_with_args("mm", "this.rows.push(mm); return this.rows.length;")),
        ),
        (
            "findFirstUnusedRow",
            Some(Function::new_no_args("return this.rows.length + 1;")),
        ),
        ("deleteRow", Some(Function::new_with_args("row", "this.rows.splice(row - 1, 1);"))),
        (
            "measurementAt",
            Some(Function::new_with_args("row", "return this.rows[row - 1] ?? null;")),
        ),
    ];
    for (name, f) in methods {
        let value: JsValue = match f {
            Some(f) => f.into(),
            None => js_sys::Array::new().into(),
        };
        Reflect::set(&ledger, &JsValue::from_str(name), &value).unwrap();
    }
    ledger.into()
}

#[wasm_bindgen_test]
fn invalid_dimensions_are_rejected() {
    assert!(MeasuringGrid::with_dimensions(0, 7, 4).is_err());
    let mut grid = MeasuringGrid::new();
    assert!(grid.rebuild(5, 21, 4).is_err());
    assert!(grid.apply_layout(&[1, 0, 1]).is_err());
    assert!(grid.load_config_json("{".to_string()).is_err());
    assert_eq!(grid.rows(), 7);
}

#[wasm_bindgen_test]
fn attaching_a_plain_object_fails() {
    let mut grid = MeasuringGrid::new();
    assert!(grid.attach_ledger(Object::new().into()).is_err());
    assert!(!grid.has_ledger());
    assert!(grid.delete_last_measurement().is_err());
}

#[wasm_bindgen_test]
fn js_ledger_records_and_deletes() {
    let mut grid = MeasuringGrid::new();
    assert_eq!(grid.attach_ledger(js_ledger()).unwrap(), 1);

    grid.pick_cell(0, 0);
    assert_eq!(grid.pick_cell(0, 3), PICK_MEASURED);
    assert_eq!(grid.last_ledger_error(), None);
    assert_eq!(grid.next_row(), 2);

    assert_eq!(grid.delete_last_measurement().unwrap(), 1);
    assert_eq!(grid.next_row(), 1);
    assert_eq!(grid.last_measurement(), None);
}
