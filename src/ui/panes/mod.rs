//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over data owned by the
//! [`App`](crate::ui::App).
//!
//! # Pane Modules
//!
//! - [`legend`]: Key bindings and the color key
//! - [`bars`]: The array drawn as a bar chart with per-index highlights
//! - [`status`]: Status bar with the selected algorithm, step count and run state

pub mod bars;
pub mod legend;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, Bars};
pub use legend::{render_legend_pane, LEGEND_HEIGHT};
pub use status::render_status_bar;
