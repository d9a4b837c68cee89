//! # Introduction
//!
//! unitty converts numeric values between measurement units and shows the
//! result live in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key event → App state → Conversion Engine → formatted result → TUI
//! ```
//!
//! 1. [`convert`] — the conversion engine: closed unit sets per category, a
//!    table of multiplicative factors routed through a base unit, and the
//!    rounding/formatting policy for the displayed result.
//! 2. [`ui`] — ratatui-based TUI: category navigation bar, live converter
//!    section, placeholder sections for unimplemented categories, and a
//!    status bar. Not part of the stable library API.
//!
//! ## Supported categories
//!
//! Length is fully implemented (mm, cm, m, km, inch, foot, yard, mile, all
//! routed through meters). Weight, temperature, and volume are declared but
//! render placeholder panels; temperature in particular needs affine
//! conversion support before it can share the multiplicative table.

pub mod convert;
pub mod ui;
