//! Closed unit and category sets
//!
//! Both enums are fixed at compile time: there is no mechanism for
//! registering units at runtime, and the engine treats a unit outside its
//! category's table as a programming error rather than user input.

use std::fmt;
use std::str::FromStr;

use crate::convert::errors::ParseError;

/// A measurement domain with its own closed unit set and conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Category {
    /// Navigation order for the category bar
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    /// Lowercase identifier used for the CLI argument
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
        }
    }

    /// Heading shown in the converter / placeholder section
    pub fn title(self) -> &'static str {
        match self {
            Category::Length => "Length / Metric Converter",
            Category::Weight => "Weight Converter",
            Category::Temperature => "Temperature Converter",
            Category::Volume => "Volume Converter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Length => "Convert between metric and imperial length units",
            Category::Weight => {
                "Convert between different weight units (Kilograms, Pounds, Ounces, etc.)"
            }
            Category::Temperature => {
                "Convert between different temperature units (Celsius, Fahrenheit, Kelvin)"
            }
            Category::Volume => {
                "Convert between different volume units (Liters, Gallons, Milliliters, etc.)"
            }
        }
    }

    /// Whether a live conversion table exists for this category.
    ///
    /// The other categories render placeholder panels. Temperature cannot
    /// join the multiplicative table as-is: Celsius/Fahrenheit/Kelvin are
    /// affine conversions and need offset support first.
    pub fn is_available(self) -> bool {
        matches!(self, Category::Length)
    }

    /// Next category in navigation order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Category::Length => Category::Weight,
            Category::Weight => Category::Temperature,
            Category::Temperature => Category::Volume,
            Category::Volume => Category::Length,
        }
    }

    /// Previous category in navigation order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Category::Length => Category::Volume,
            Category::Weight => Category::Length,
            Category::Temperature => Category::Weight,
            Category::Volume => Category::Temperature,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            "volume" => Ok(Category::Volume),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

/// A length unit from the closed set convertible through meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// Selector order, metric first then imperial
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// Short identifier, also accepted by [`FromStr`]
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
            LengthUnit::Yard => "yard",
            LengthUnit::Mile => "mile",
        }
    }

    /// Full label for the unit selectors
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "Millimeter (mm)",
            LengthUnit::Centimeter => "Centimeter (cm)",
            LengthUnit::Meter => "Meter (m)",
            LengthUnit::Kilometer => "Kilometer (km)",
            LengthUnit::Inch => "Inch (in)",
            LengthUnit::Foot => "Foot (ft)",
            LengthUnit::Yard => "Yard (yd)",
            LengthUnit::Mile => "Mile (mi)",
        }
    }

    /// Next unit in selector order (wraps around)
    pub fn next(self) -> Self {
        match self {
            LengthUnit::Millimeter => LengthUnit::Centimeter,
            LengthUnit::Centimeter => LengthUnit::Meter,
            LengthUnit::Meter => LengthUnit::Kilometer,
            LengthUnit::Kilometer => LengthUnit::Inch,
            LengthUnit::Inch => LengthUnit::Foot,
            LengthUnit::Foot => LengthUnit::Yard,
            LengthUnit::Yard => LengthUnit::Mile,
            LengthUnit::Mile => LengthUnit::Millimeter,
        }
    }

    /// Previous unit in selector order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            LengthUnit::Millimeter => LengthUnit::Mile,
            LengthUnit::Centimeter => LengthUnit::Millimeter,
            LengthUnit::Meter => LengthUnit::Centimeter,
            LengthUnit::Kilometer => LengthUnit::Meter,
            LengthUnit::Inch => LengthUnit::Kilometer,
            LengthUnit::Foot => LengthUnit::Inch,
            LengthUnit::Yard => LengthUnit::Foot,
            LengthUnit::Mile => LengthUnit::Yard,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" => Ok(LengthUnit::Millimeter),
            "cm" => Ok(LengthUnit::Centimeter),
            "m" => Ok(LengthUnit::Meter),
            "km" => Ok(LengthUnit::Kilometer),
            "inch" => Ok(LengthUnit::Inch),
            "foot" => Ok(LengthUnit::Foot),
            "yard" => Ok(LengthUnit::Yard),
            "mile" => Ok(LengthUnit::Mile),
            _ => Err(ParseError::UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str_accepts_any_case() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("Weight".parse::<Category>().unwrap(), Category::Weight);
        assert_eq!(
            "TEMPERATURE".parse::<Category>().unwrap(),
            Category::Temperature
        );
    }

    #[test]
    fn category_from_str_rejects_unknown() {
        assert!("pressure".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn unit_from_str_round_trips_symbols() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.symbol().parse::<LengthUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn category_navigation_wraps_both_ways() {
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
            assert_eq!(category.prev().next(), category);
        }
        assert_eq!(Category::Volume.next(), Category::Length);
        assert_eq!(Category::Length.prev(), Category::Volume);
    }

    #[test]
    fn unit_navigation_covers_the_whole_set() {
        let mut unit = LengthUnit::Millimeter;
        let mut seen = Vec::new();
        for _ in 0..LengthUnit::ALL.len() {
            seen.push(unit);
            unit = unit.next();
        }
        assert_eq!(unit, LengthUnit::Millimeter);
        assert_eq!(seen, LengthUnit::ALL);
    }

    #[test]
    fn only_length_is_available() {
        for category in Category::ALL {
            assert_eq!(category.is_available(), category == Category::Length);
        }
    }
}
