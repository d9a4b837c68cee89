//! Parse errors for unit and category identifiers
//!
//! These cover text arriving from outside the closed sets (the CLI argument,
//! test fixtures). A unit missing from its own category's table is not
//! represented here: the sets are fixed at compile time, so that case is a
//! contract violation and panics instead.

use std::fmt;

/// Failed to parse a category or unit identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCategory(String),
    UnknownUnit(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCategory(name) => {
                write!(f, "Unknown category '{}'", name)
            }
            ParseError::UnknownUnit(name) => {
                write!(f, "Unknown unit '{}'", name)
            }
        }
    }
}

impl std::error::Error for ParseError {}
