//! The conversion engine: unit sets, factor tables, and result formatting.
//!
//! Conversions are table-driven: every unit in a category carries a single
//! multiplicative factor to the category's base unit (meters, for length),
//! and a conversion routes through that base unit. Adding a unit is one new
//! table entry, not a row and column of pairwise factors.
//!
//! The engine is pure: no I/O, no shared state. The UI layer feeds it the
//! raw input text and writes the returned display string back to the screen.

pub mod engine;
pub mod errors;
pub mod format;
pub mod table;
pub mod units;

pub use engine::{convert, display, EMPTY_DISPLAY};
pub use errors::ParseError;
pub use format::format_result;
pub use table::ConversionTable;
pub use units::{Category, LengthUnit};
