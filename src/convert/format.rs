//! Result formatting
//!
//! The display policy must be stable for compatibility: round to 2 decimals
//! (half away from zero), render whole numbers without a decimal point, and
//! render everything else with exactly 2 digits after the point.

/// Format a conversion result for display.
///
/// `1000.0` → `"1000"`, `5.25` → `"5.25"`, `1.609344` → `"1.61"`.
pub fn format_result(result: f64) -> String {
    // Round to 2 decimal places, half away from zero
    let mut rounded = (result * 100.0).round() / 100.0;

    // Normalize negative zero so small negative values render as "0"
    if rounded == 0.0 {
        rounded = 0.0;
    }

    if rounded.fract() == 0.0 {
        // Whole number: no decimal point, no trailing zeros
        format!("{}", rounded)
    } else {
        format!("{:.2}", rounded)
    }
}
