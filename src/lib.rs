//! # Introduction
//!
//! Sortty animates classic comparison sorts over a random array of bar
//! heights in the terminal. Every comparison, swap and write is shown as a
//! frame with the bars involved highlighted by role.
//!
//! ## Pipeline
//!
//! ```text
//! Config → Dataset → Sorter (one step per frame) → ColorMap → TUI
//! ```
//!
//! 1. [`config`] — startup constants and `SORTTY_*` environment overrides.
//! 2. [`dataset`] — uniformly random bar heights within the configured bounds.
//! 3. [`sorting`] — bubble, insertion, selection, merge and quick sort as
//!    resumable state machines that each return a [`sorting::Step`] per call.
//! 4. [`ui`] — ratatui-based TUI: the driver that owns the array and paces
//!    the sorter, and the panes that draw it.
//!
//! ## Controls
//!
//! `b`/`i`/`s`/`m`/`q` start a sort, `space` pauses and resumes, `r`
//! generates new data, `esc` quits.

pub mod config;
pub mod dataset;
pub mod sorting;
pub mod ui;
