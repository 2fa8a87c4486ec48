use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::ledger::{Ledger, RowIndex};
use crate::error::LedgerError;

const REQUIRED_METHODS: [&str; 3] = ["appendMeasurement", "findFirstUnusedRow", "deleteRow"];

/// Ledger backed by a JS object.
///
/// Required methods: `appendMeasurement(mm) -> row`, `findFirstUnusedRow() -> row`,
/// `deleteRow(row)`. Optional: `lastUsedRow() -> row | null`,
/// `measurementAt(row) -> number | null`, `rowLabel(row) -> string | null`.
/// A thrown exception becomes `LedgerError::Backend`.
pub struct JsLedger {
    target: JsValue,
}

impl JsLedger {
    pub fn new(target: JsValue) -> Result<Self, LedgerError> {
        for name in REQUIRED_METHODS {
            method(&target, name)?;
        }
        Ok(Self { target })
    }

    fn call0(&self, name: &str) -> Result<JsValue, LedgerError> {
        method(&self.target, name)?
            .call0(&self.target)
            .map_err(js_error)
    }

    fn call1(&self, name: &str, arg: JsValue) -> Result<JsValue, LedgerError> {
        method(&self.target, name)?
            .call1(&self.target, &arg)
            .map_err(js_error)
    }

    fn has_method(&self, name: &str) -> bool {
        method(&self.target, name).is_ok()
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function, LedgerError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| LedgerError::Backend(format!("ledger object has no `{name}` method")))
}

fn js_error(e: JsValue) -> LedgerError {
    LedgerError::Backend(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

fn as_row(value: JsValue) -> Result<RowIndex, LedgerError> {
    match value.as_f64() {
        Some(n) => row_from_f64(n),
        None => Err(LedgerError::Backend(format!("expected a row number, got {value:?}"))),
    }
}

/// Whole numbers in `1..=u32::MAX` only; JS numbers are never truncated into a row.
fn row_from_f64(n: f64) -> Result<RowIndex, LedgerError> {
    if n.fract() == 0.0 && (1.0..=f64::from(RowIndex::MAX)).contains(&n) {
        Ok(n as RowIndex)
    } else {
        Err(LedgerError::Backend(format!("expected a row number, got {n}")))
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

impl Ledger for JsLedger {
    fn append_measurement(&mut self, distance_mm: f64) -> Result<RowIndex, LedgerError> {
        as_row(self.call1("appendMeasurement", JsValue::from_f64(distance_mm))?)
    }

    fn find_first_unused_row(&self) -> Result<RowIndex, LedgerError> {
        as_row(self.call0("findFirstUnusedRow")?)
    }

    fn delete_row(&mut self, row: RowIndex) -> Result<(), LedgerError> {
        self.call1("deleteRow", JsValue::from(row)).map(|_| ())
    }

    fn last_used_row(&self) -> Result<Option<RowIndex>, LedgerError> {
        if !self.has_method("lastUsedRow") {
            let first = self.find_first_unused_row()?;
            return Ok((first > 1).then(|| first - 1));
        }
        let value = self.call0("lastUsedRow")?;
        if is_absent(&value) {
            return Ok(None);
        }
        as_row(value).map(Some)
    }

    fn measurement_at(&self, row: RowIndex) -> Result<Option<f64>, LedgerError> {
        if !self.has_method("measurementAt") {
            return Ok(None);
        }
        Ok(self.call1("measurementAt", JsValue::from(row))?.as_f64())
    }

    fn row_label(&self, row: RowIndex) -> Result<Option<String>, LedgerError> {
        if !self.has_method("rowLabel") {
            return Ok(None);
        }
        Ok(self
            .call1("rowLabel", JsValue::from(row))?
            .as_string()
            .filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_must_be_whole_and_in_range() {
        assert_eq!(row_from_f64(1.0), Ok(1));
        assert_eq!(row_from_f64(4_294_967_295.0), Ok(RowIndex::MAX));
        for bad in [0.0, -3.0, 2.7, 4_294_967_296.0, 1e300, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(row_from_f64(bad), Err(LedgerError::Backend(_))),
                "{bad} accepted"
            );
        }
    }
}
