//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::playback::{Command, Mode, PlaybackController};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before drawing the next frame
const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// The main application state
pub struct App {
    /// The playback controller being visualized
    pub controller: PlaybackController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the controller was last ticked
    pub last_tick: Instant,
}

impl App {
    pub fn new(controller: PlaybackController) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Press space to start"),
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            let now = Instant::now();
            let was_running = self.controller.mode() == Mode::Running;
            self.controller.tick(now - self.last_tick);
            self.last_tick = now;

            if was_running && self.controller.mode() == Mode::Finished {
                self.status_message = "Sorted!".to_string();
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let snapshot = self.controller.snapshot();
        super::panes::render_header(frame, chunks[0], &snapshot);
        super::panes::render_bars_pane(frame, chunks[1], &snapshot);
        super::panes::render_status_bar(frame, chunks[2], &snapshot, &self.status_message);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(algorithm) = Algorithm::from_index(index) {
                    self.select_algorithm(algorithm);
                }
            }
            KeyCode::Tab => {
                self.select_algorithm(self.controller.algorithm().next());
            }
            KeyCode::BackTab => {
                self.select_algorithm(self.controller.algorithm().prev());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.command(Command::Reset);
                self.status_message = "Shuffled".to_string();
            }
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Right => {
                self.controller.command(Command::StepOnce);
                if self.controller.mode() == Mode::Paused {
                    self.status_message = "Stepped forward".to_string();
                }
            }
            KeyCode::Enter => {
                self.controller.command(Command::SkipToEnd);
                if self.controller.mode() == Mode::Finished {
                    self.status_message = "Jumped to end".to_string();
                }
            }
            KeyCode::Up => {
                self.controller.command(Command::SpeedUp);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            KeyCode::Down => {
                self.controller.command(Command::SpeedDown);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(Command::GrowSize),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize(Command::ShrinkSize),
            _ => {}
        }
    }

    /// Space starts from idle, toggles while a run is in progress, and
    /// reshuffles once the run is finished
    fn toggle_playback(&mut self) {
        match self.controller.mode() {
            Mode::Idle => {
                self.controller.command(Command::Start);
                self.status_message = "Running...".to_string();
            }
            Mode::Running => {
                self.controller.command(Command::Pause);
                self.status_message = "Paused".to_string();
            }
            Mode::Paused => {
                self.controller.command(Command::Pause);
                self.status_message = "Running...".to_string();
            }
            Mode::Finished => {
                self.controller.command(Command::Reset);
                self.status_message = "Shuffled".to_string();
            }
        }
        self.last_tick = Instant::now();
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        let size = self.controller.buffer().len();
        self.controller.configure(algorithm, size);
        self.status_message = format!("{} selected", algorithm.name());
    }

    fn resize(&mut self, command: Command) {
        if self.controller.mode() == Mode::Running {
            self.status_message = "Pause before resizing".to_string();
            return;
        }
        self.controller.command(command);
        self.status_message = format!("{} elements", self.controller.buffer().len());
    }
}
