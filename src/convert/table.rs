//! Conversion factor tables
//!
//! A [`ConversionTable`] maps every unit of one category to its
//! multiplicative factor relative to the category's base unit. Invariants:
//! exactly one entry per supported unit, every factor positive, and the base
//! unit's own factor exactly 1.

use rustc_hash::FxHashMap;

use crate::convert::units::LengthUnit;

/// Factors to the base unit for one category
pub struct ConversionTable {
    factors: FxHashMap<LengthUnit, f64>,
}

impl ConversionTable {
    /// The length table, with meters as the base unit
    pub fn length() -> Self {
        let mut factors = FxHashMap::default();
        factors.insert(LengthUnit::Millimeter, 0.001);
        factors.insert(LengthUnit::Centimeter, 0.01);
        factors.insert(LengthUnit::Meter, 1.0);
        factors.insert(LengthUnit::Kilometer, 1000.0);
        factors.insert(LengthUnit::Inch, 0.0254);
        factors.insert(LengthUnit::Foot, 0.3048);
        factors.insert(LengthUnit::Yard, 0.9144);
        factors.insert(LengthUnit::Mile, 1609.344);
        ConversionTable { factors }
    }

    /// Factor converting one `unit` to base-unit equivalents.
    ///
    /// Panics if `unit` has no entry: the unit set is closed, so a missing
    /// entry is a bug in the table, not a runtime condition.
    pub fn factor(&self, unit: LengthUnit) -> f64 {
        self.factors
            .get(&unit)
            .copied()
            .unwrap_or_else(|| panic!("Unit {:?} missing from conversion table", unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_a_positive_factor() {
        let table = ConversionTable::length();
        for unit in LengthUnit::ALL {
            assert!(table.factor(unit) > 0.0, "factor for {:?}", unit);
        }
    }

    #[test]
    fn base_unit_factor_is_one() {
        let table = ConversionTable::length();
        assert_eq!(table.factor(LengthUnit::Meter), 1.0);
    }

    #[test]
    fn imperial_factors_match_their_definitions() {
        let table = ConversionTable::length();
        assert_eq!(table.factor(LengthUnit::Inch), 0.0254);
        assert_eq!(table.factor(LengthUnit::Foot), 0.3048);
        assert_eq!(table.factor(LengthUnit::Yard), 0.9144);
        assert_eq!(table.factor(LengthUnit::Mile), 1609.344);
    }
}
