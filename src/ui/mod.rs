//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — application state, key commands, the fixed-rate frame loop
//! - **[`panes`]** — stateless render functions for the legend, bar chart and status bar
//! - **[`theme`]** — color palette, including the bar color for each highlight role
//! - **[`headless`]** — the same frame loop on an in-memory backend, for runs without a TTY
//!
//! The entry point for consumers is [`App`]: construct it with a [`Config`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod headless;
pub mod panes;
pub mod theme;

pub use app::App;
