//! Headless runs against an in-memory terminal
//!
//! Drives the same [`App`] tick/render cycle as the interactive loop, but on a
//! [`TestBackend`] with no frame pacing and no input. Used for scripted runs
//! and smoke tests where no TTY is available.

use crate::config::Config;
use crate::sorting::{is_sorted, Algorithm};
use crate::ui::app::{App, Command};
use anyhow::{Context, Result};
use ratatui::{backend::TestBackend, Terminal};

pub const HEADLESS_WIDTH: u16 = 100;
pub const HEADLESS_HEIGHT: u16 = 32;

/// Upper bound on frames; a correct sorter finishes long before this
pub const MAX_HEADLESS_FRAMES: usize = 5_000_000;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    pub algorithm: Algorithm,
    pub bars: usize,
    /// Frames drawn, the initial frame included
    pub frames: usize,
    /// Sorter steps taken
    pub steps: usize,
    /// Whether the data ended in non-decreasing order
    pub sorted: bool,
    /// Whether the data ended as a permutation of the input
    pub permutation: bool,
}

impl HeadlessReport {
    pub fn is_success(&self) -> bool {
        self.sorted && self.permutation
    }
}

/// Sort freshly generated data with `algorithm`, drawing every frame
pub fn run_headless(config: Config, algorithm: Algorithm) -> Result<HeadlessReport> {
    let backend = TestBackend::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let mut terminal = Terminal::new(backend).context("failed to build test backend")?;

    let mut app = App::new(config);
    let original = app.data.clone();

    app.handle_command(Command::Start(algorithm));
    terminal.draw(|f| app.render(f))?;
    let mut frames = 1;

    while app.running && frames < MAX_HEADLESS_FRAMES {
        app.tick();
        terminal.draw(|f| app.render(f))?;
        frames += 1;
    }

    let mut expected = original;
    expected.sort_unstable();
    let mut actual = app.data.clone();
    actual.sort_unstable();

    Ok(HeadlessReport {
        algorithm,
        bars: app.data.len(),
        frames,
        steps: app.steps,
        sorted: is_sorted(&app.data),
        permutation: actual == expected,
    })
}
