//! The conversion operation and the caller-facing display pipeline

use crate::convert::format::format_result;
use crate::convert::table::ConversionTable;
use crate::convert::units::LengthUnit;

/// Display string used when there is no value to convert
pub const EMPTY_DISPLAY: &str = "0.00";

/// Convert `value` from one unit to another through the base unit.
///
/// Pure: `value * table[from] / table[to]`. The sign of `value` is
/// preserved; identity conversions are exact because both factors cancel.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit, table: &ConversionTable) -> f64 {
    let base = value * table.factor(from);
    base / table.factor(to)
}

/// Produce the display string for raw input text.
///
/// Blank input short-circuits to [`EMPTY_DISPLAY`] without touching the
/// conversion math. Input that does not parse as a finite number (including
/// literal `NaN`/`inf`, which `f64::from_str` accepts) is treated the same
/// as nothing entered.
pub fn display(input: &str, from: LengthUnit, to: LengthUnit, table: &ConversionTable) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return EMPTY_DISPLAY.to_string();
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format_result(convert(value, from, to, table)),
        _ => EMPTY_DISPLAY.to_string(),
    }
}
