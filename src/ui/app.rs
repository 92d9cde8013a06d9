//! Main TUI application state and logic

use crate::config::Config;
use crate::dataset::make_dataset;
use crate::sorting::{is_sorted, Algorithm, ColorMap, Sorter};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// A user command, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Regenerate the data and stop any sort
    Reset,
    /// Pause or resume the current sort
    TogglePlay,
    /// Start sorting the current data
    Start(Algorithm),
    Quit,
}

impl Command {
    /// Decode a key press; `None` for unbound keys
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::TogglePlay),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            KeyCode::Char(c) => {
                Algorithm::from_key(c.to_ascii_lowercase()).map(Command::Start)
            }
            _ => None,
        }
    }
}

/// What the driver is doing, as shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No sort selected
    Idle,
    /// Advancing the sorter every frame
    Sorting,
    /// A sorter exists but is not advancing
    Paused,
    /// The last sort ran to completion
    Sorted,
}

/// The main application state
pub struct App {
    pub config: Config,

    /// Bar heights being sorted
    pub data: Vec<u32>,

    /// Active sorter, dropped on reset and on completion
    pub sorter: Option<Sorter>,

    /// Whether the sorter advances every frame
    pub running: bool,

    /// Highlights for the next frame
    pub colors: ColorMap,

    /// Algorithm of the current or most recent run
    pub algorithm: Option<Algorithm>,

    /// Steps taken by the current or most recent run
    pub steps: usize,

    /// Whether the most recent run finished
    pub finished: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: StdRng,
}

impl App {
    /// Create a new app with freshly generated data
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let data = make_dataset(&mut rng, config.bars, config.bar_min..=config.bar_max);

        App {
            config,
            data,
            sorter: None,
            running: false,
            colors: ColorMap::default(),
            algorithm: None,
            steps: 0,
            finished: false,
            should_quit: false,
            status_message: String::from("Pick an algorithm to start"),
            rng,
        }
    }

    pub fn run_state(&self) -> RunState {
        if self.running {
            RunState::Sorting
        } else if self.sorter.is_some() {
            RunState::Paused
        } else if self.finished {
            RunState::Sorted
        } else {
            RunState::Idle
        }
    }

    /// Run the TUI application at the configured frame rate
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame_interval = self.config.frame_interval();
        let mut next_frame = Instant::now();

        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            // Handle input until the next frame is due
            next_frame += frame_interval;
            loop {
                let timeout = next_frame.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
                if self.should_quit {
                    return Ok(());
                }
            }

            // Drop frames rather than bursting to catch up
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }
        }
    }

    /// Advance one frame: step the sorter once if running, otherwise clear highlights
    pub fn tick(&mut self) {
        if self.running {
            if let Some(sorter) = self.sorter.as_mut() {
                let step = sorter.step(&mut self.data);
                self.steps = sorter.steps();
                self.colors = step.colors;
                if !step.more {
                    self.finish();
                }
                return;
            }
        }
        self.colors.clear();
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(super::panes::LEGEND_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_legend_pane(frame, chunks[0]);

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            &self.data,
            &self.colors,
            self.config.bar_max,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.algorithm,
            self.steps,
            self.data.len(),
            self.run_state(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(command) = Command::from_key(key) {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        debug!(?command, running = self.running, "command");
        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::Reset => self.reset(),
            Command::TogglePlay => {
                if self.sorter.is_none() {
                    self.status_message = "Pick an algorithm first".to_string();
                    return;
                }
                self.running = !self.running;
                self.status_message = if self.running {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            Command::Start(algorithm) => {
                if self.running {
                    self.status_message = "Pause or wait for the current sort to finish".to_string();
                    return;
                }
                self.start(algorithm);
            }
        }
    }

    fn start(&mut self, algorithm: Algorithm) {
        info!(algorithm = algorithm.name(), bars = self.data.len(), "starting sort");
        self.sorter = Some(algorithm.sorter(self.data.len()));
        self.algorithm = Some(algorithm);
        self.running = true;
        self.steps = 0;
        self.finished = false;
        self.status_message = format!("{} running", algorithm.name());
    }

    fn reset(&mut self) {
        if let Some(sorter) = self.sorter.take() {
            info!(
                algorithm = sorter.algorithm().name(),
                steps = sorter.steps(),
                "sort abandoned by reset"
            );
        }
        self.data = make_dataset(
            &mut self.rng,
            self.config.bars,
            self.config.bar_min..=self.config.bar_max,
        );
        self.running = false;
        self.colors.clear();
        self.algorithm = None;
        self.steps = 0;
        self.finished = false;
        self.status_message = format!("Generated {} new bars", self.data.len());
    }

    fn finish(&mut self) {
        self.running = false;
        self.sorter = None;
        self.finished = true;

        let name = self.algorithm.map(Algorithm::name).unwrap_or("Sort");
        info!(
            algorithm = name,
            steps = self.steps,
            sorted = is_sorted(&self.data),
            "sort finished"
        );
        self.status_message = format!("{} finished in {} steps", name, self.steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(bars: usize) -> App {
        App::new(Config {
            bars,
            seed: Some(11),
            ..Config::default()
        })
    }

    fn run_until_done(app: &mut App) -> usize {
        let mut frames = 0;
        while app.running {
            app.tick();
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_key_decoding() {
        assert_eq!(Command::from_key(key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(Command::from_key(key(KeyCode::Char('R'))), Some(Command::Reset));
        assert_eq!(
            Command::from_key(key(KeyCode::Char(' '))),
            Some(Command::TogglePlay)
        );
        assert_eq!(
            Command::from_key(key(KeyCode::Char('q'))),
            Some(Command::Start(Algorithm::Quick))
        );
        assert_eq!(
            Command::from_key(key(KeyCode::Char('M'))),
            Some(Command::Start(Algorithm::Merge))
        );
        assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            Command::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(Command::from_key(key(KeyCode::Char('c'))), None);
        assert_eq!(Command::from_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_seeded_data_is_reproducible() {
        assert_eq!(app(16).data, app(16).data);
        assert!(app(16)
            .data
            .iter()
            .all(|v| (crate::config::BAR_MIN..=crate::config::BAR_MAX).contains(v)));
    }

    #[test]
    fn test_start_and_finish() {
        let mut app = app(12);
        assert_eq!(app.run_state(), RunState::Idle);

        app.handle_key_event(key(KeyCode::Char('b')));
        assert!(app.running);
        assert_eq!(app.run_state(), RunState::Sorting);
        assert_eq!(app.algorithm, Some(Algorithm::Bubble));

        let frames = run_until_done(&mut app);
        assert_eq!(frames, app.steps);
        assert!(is_sorted(&app.data));
        assert!(app.sorter.is_none());
        assert!(app.colors.is_empty());
        assert_eq!(app.run_state(), RunState::Sorted);
        assert!(app.status_message.contains("finished"));
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut app = app(12);
        app.handle_command(Command::Start(Algorithm::Merge));
        app.tick();
        app.handle_command(Command::Start(Algorithm::Bubble));

        assert_eq!(app.algorithm, Some(Algorithm::Merge));
        assert_eq!(app.sorter.as_ref().map(Sorter::algorithm), Some(Algorithm::Merge));
        assert_eq!(app.steps, 1);
    }

    #[test]
    fn test_start_allowed_while_paused() {
        let mut app = app(12);
        app.handle_command(Command::Start(Algorithm::Merge));
        app.tick();
        app.handle_command(Command::TogglePlay);
        app.handle_command(Command::Start(Algorithm::Quick));

        assert_eq!(app.algorithm, Some(Algorithm::Quick));
        assert!(app.running);
        assert_eq!(app.steps, 0);
        run_until_done(&mut app);
        assert!(is_sorted(&app.data));
    }

    #[test]
    fn test_start_over_paused_insertion_mid_shift() {
        let mut app = app(3);
        app.data = vec![3, 2, 1];
        app.handle_command(Command::Start(Algorithm::Insertion));
        for _ in 0..3 {
            app.tick();
        }
        app.handle_command(Command::TogglePlay);
        assert_eq!(app.run_state(), RunState::Paused);
        // The 1 being inserted is held by the sorter
        assert_eq!(app.data, vec![2, 3, 3]);

        app.handle_command(Command::Start(Algorithm::Selection));
        assert_eq!(app.algorithm, Some(Algorithm::Selection));
        run_until_done(&mut app);

        assert!(app.finished);
        assert_eq!(app.data, vec![2, 3, 3]);
        assert!(is_sorted(&app.data));
    }

    #[test]
    fn test_toggle_without_sorter_is_ignored() {
        let mut app = app(8);
        app.handle_command(Command::TogglePlay);
        assert!(!app.running);
        assert_eq!(app.run_state(), RunState::Idle);
    }

    #[test]
    fn test_paused_frames_do_not_advance() {
        let mut app = app(8);
        app.handle_command(Command::Start(Algorithm::Selection));
        app.tick();
        app.tick();
        let snapshot = app.data.clone();

        app.handle_command(Command::TogglePlay);
        assert_eq!(app.run_state(), RunState::Paused);
        for _ in 0..10 {
            app.tick();
        }
        assert_eq!(app.steps, 2);
        assert_eq!(app.data, snapshot);
        // No highlights while paused
        assert!(app.colors.is_empty());
    }

    #[test]
    fn test_reset_discards_sorter() {
        let mut app = app(10);
        let before = app.data.clone();
        app.handle_command(Command::Start(Algorithm::Insertion));
        app.tick();
        app.handle_command(Command::Reset);

        assert!(app.sorter.is_none());
        assert!(!app.running);
        assert_eq!(app.run_state(), RunState::Idle);
        assert_eq!(app.data.len(), 10);
        assert_ne!(app.data, before);
        // Toggling after reset has nothing to resume
        app.handle_command(Command::TogglePlay);
        assert!(!app.running);
    }

    #[test]
    fn test_quit() {
        let mut app = app(4);
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
