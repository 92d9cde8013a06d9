// Sortty: Sorting Algorithm Visualizer

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sortty::config::{Config, ENV_HEADLESS};
use sortty::sorting::Algorithm;
use sortty::ui::headless::run_headless;
use sortty::ui::App;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("invalid configuration")?;

    match std::env::var(ENV_HEADLESS) {
        Ok(name) if !name.trim().is_empty() => {
            let algorithm: Algorithm = name.parse()?;
            run_headless_mode(config, algorithm)
        }
        _ => run_interactive(config),
    }
}

fn run_headless_mode(config: Config, algorithm: Algorithm) -> Result<()> {
    let report = run_headless(config, algorithm)?;
    info!(
        target: "sortty::headless",
        algorithm = report.algorithm.name(),
        bars = report.bars,
        frames = report.frames,
        steps = report.steps,
        sorted = report.sorted,
        permutation = report.permutation,
        "Headless run completed"
    );

    if !report.is_success() {
        anyhow::bail!(
            "{} did not sort the data (sorted: {}, permutation: {})",
            algorithm,
            report.sorted,
            report.permutation
        );
    }
    Ok(())
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        // From here on every early return restores the terminal
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
    }
}

fn run_interactive(config: Config) -> Result<()> {
    // Set up terminal
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to build terminal backend")?;

    // Create and run app
    let mut app = App::new(config);
    app.run(&mut terminal).context("event loop failed")
}
