//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visible sections of the
//! converter, organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`nav`]: category navigation bar with the selected category highlighted
//! - [`converter`]: live converter section (value input, unit selectors,
//!   result box)
//! - [`placeholder`]: data-driven panel for categories without a live
//!   conversion table yet
//! - [`status`]: status bar with keybindings and the current status message
//!
//! Each render function is stateless: it draws from the values passed in
//! and never mutates application state.

pub mod converter;
pub mod nav;
pub mod placeholder;
pub mod status;

// Re-export render functions for convenience
pub use converter::render_converter_pane;
pub use nav::render_nav_bar;
pub use placeholder::render_placeholder_pane;
pub use status::render_status_bar;
