// Tests for the conversion engine: table lookups, math, and formatting

use unitty::convert::{ConversionTable, LengthUnit, convert, display, format_result};

const SAMPLE_VALUES: [f64; 6] = [0.1, 1.0, 2.54, 7.5, 123.456, 100000.0];

#[test]
fn identity_conversion_returns_the_input() {
    let table = ConversionTable::length();
    for unit in LengthUnit::ALL {
        for x in SAMPLE_VALUES {
            assert_eq!(
                convert(x, unit, unit, &table),
                x,
                "identity for {} of {}",
                unit,
                x
            );
        }
    }
}

#[test]
fn round_trip_recovers_the_input_within_tolerance() {
    let table = ConversionTable::length();
    for from in LengthUnit::ALL {
        for to in LengthUnit::ALL {
            for x in SAMPLE_VALUES {
                let there = convert(x, from, to, &table);
                let back = convert(there, to, from, &table);
                let rel = (back - x).abs() / x;
                assert!(
                    rel < 1e-12,
                    "round trip {} -> {} -> {} drifted: {} vs {}",
                    from,
                    to,
                    from,
                    back,
                    x
                );
            }
        }
    }
}

#[test]
fn conversions_route_through_meters() {
    let table = ConversionTable::length();
    assert_eq!(convert(2.0, LengthUnit::Kilometer, LengthUnit::Meter, &table), 2000.0);
    assert_eq!(convert(1.0, LengthUnit::Mile, LengthUnit::Kilometer, &table), 1.609344);
    assert_eq!(convert(5.0, LengthUnit::Centimeter, LengthUnit::Millimeter, &table), 50.0);
}

#[test]
fn negative_values_convert_symmetrically() {
    let table = ConversionTable::length();
    assert_eq!(convert(-3.0, LengthUnit::Meter, LengthUnit::Centimeter, &table), -300.0);
    assert_eq!(
        display("-3", LengthUnit::Meter, LengthUnit::Centimeter, &table),
        "-300"
    );
}

#[test]
fn whole_number_results_render_without_decimals() {
    let table = ConversionTable::length();
    assert_eq!(display("1000", LengthUnit::Meter, LengthUnit::Kilometer, &table), "1");
    assert_eq!(display("5", LengthUnit::Centimeter, LengthUnit::Millimeter, &table), "50");
    assert_eq!(display("2", LengthUnit::Kilometer, LengthUnit::Meter, &table), "2000");
    // 1 ft = 12.000000000000002 in before rounding
    assert_eq!(display("1", LengthUnit::Foot, LengthUnit::Inch, &table), "12");
    assert_eq!(display("3", LengthUnit::Yard, LengthUnit::Foot, &table), "9");
}

#[test]
fn fractional_results_render_with_two_decimals() {
    let table = ConversionTable::length();
    assert_eq!(display("1", LengthUnit::Mile, LengthUnit::Kilometer, &table), "1.61");
    assert_eq!(display("1", LengthUnit::Inch, LengthUnit::Centimeter, &table), "2.54");
    assert_eq!(display("1", LengthUnit::Kilometer, LengthUnit::Mile, &table), "0.62");
    // Small results still round half away from zero at the 2nd decimal
    assert_eq!(display("5", LengthUnit::Meter, LengthUnit::Kilometer, &table), "0.01");
}

#[test]
fn blank_input_short_circuits_to_zero_display() {
    let table = ConversionTable::length();
    for from in LengthUnit::ALL {
        for to in LengthUnit::ALL {
            assert_eq!(display("", from, to, &table), "0.00");
            assert_eq!(display("   ", from, to, &table), "0.00");
        }
    }
}

#[test]
fn malformed_input_is_treated_as_no_value() {
    let table = ConversionTable::length();
    let from = LengthUnit::Meter;
    let to = LengthUnit::Kilometer;
    assert_eq!(display("abc", from, to, &table), "0.00");
    assert_eq!(display("1.2.3", from, to, &table), "0.00");
    assert_eq!(display("--5", from, to, &table), "0.00");
    // f64::from_str accepts these, but they are not finite values
    assert_eq!(display("NaN", from, to, &table), "0.00");
    assert_eq!(display("inf", from, to, &table), "0.00");
    assert_eq!(display("-inf", from, to, &table), "0.00");
}

#[test]
fn input_with_surrounding_whitespace_still_converts() {
    let table = ConversionTable::length();
    assert_eq!(
        display("  1000 ", LengthUnit::Meter, LengthUnit::Kilometer, &table),
        "1"
    );
}

#[test]
fn format_result_matches_the_display_policy() {
    assert_eq!(format_result(1.609344), "1.61");
    assert_eq!(format_result(12.000000000000002), "12");
    assert_eq!(format_result(8.999999999999998), "9");
    assert_eq!(format_result(0.621371192237334), "0.62");
}
