//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, focus cycling,
//!   input editing
//! - **[`panes`]** — stateless render functions for each visible section
//!   (category bar, converter, placeholder, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a starting
//! [`Category`] and call [`App::run`] to start the event loop. Every frame
//! is rendered from the current state alone; the displayed result is
//! recomputed from (input, from-unit, to-unit) rather than stored.
//!
//! [`Category`]: crate::convert::Category
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
