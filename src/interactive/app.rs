//! TUI application state and logic

use super::rendering;
use crate::game::{Difficulty, RoundStatus};
use crate::session::{Session, SubmitOutcome};
use crate::store::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::error;

/// How long the event loop waits for input before checking timers
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App<S: KeyValueStore> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub show_help: bool,
    pub should_quit: bool,
    /// Where the board was last drawn, for mouse hit-testing
    pub board_area: Rect,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            show_help: false,
            should_quit: false,
            board_area: Rect::default(),
        };

        app.add_message(
            "Guess the five-letter word! Press ? for help.",
            MessageStyle::Info,
        );
        app.announce_round();
        app.flush_store_warning();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.show_help {
            match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Enter => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                self.session.new_round();
                self.announce_round();
            }
            KeyCode::Char('t') if ctrl => {
                let theme = self.session.toggle_theme();
                self.add_message(&format!("Theme: {theme}"), MessageStyle::Info);
            }
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::F(2) => self.change_difficulty(Difficulty::Easy),
            KeyCode::F(3) => self.change_difficulty(Difficulty::Medium),
            KeyCode::F(4) => self.change_difficulty(Difficulty::Hard),
            KeyCode::Char(c) if !ctrl => {
                self.session.type_letter(c);
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Left => self.session.move_left(),
            KeyCode::Right => self.session.move_right(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }

        self.flush_store_warning();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let round = self.session.round();
        let hit = rendering::hit_cell(
            self.board_area,
            round.max_attempts(),
            mouse.column,
            mouse.row,
        );

        if let Some((row, cell)) = hit
            && row == round.attempt_index()
        {
            self.session.select_cell(cell);
        }
    }

    /// Advance timers; starts the next round once the restart is due
    pub fn on_tick(&mut self, now: Instant) {
        if self.session.tick(now) {
            self.announce_round();
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.submit(now) {
            SubmitOutcome::Incomplete => {
                self.add_message("Fill in all five letters!", MessageStyle::Error);
            }
            SubmitOutcome::Rejected(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            SubmitOutcome::Accepted(evaluation) => match evaluation.status {
                RoundStatus::Won => {
                    let attempts = self.session.round().attempt_index();
                    let celebration = match attempts {
                        1 => "🎯 First try! Extraordinary!".to_string(),
                        n => format!("🎉 Correct! Got it in {n} guesses."),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                }
                RoundStatus::Lost => {
                    let target = self.session.round().target().text().to_string();
                    self.add_message(
                        &format!("Out of attempts! The word was {target}."),
                        MessageStyle::Error,
                    );
                }
                RoundStatus::InProgress => {}
            },
        }
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
        self.add_message(
            &format!(
                "Difficulty {difficulty} ({} attempts) from the next round",
                difficulty.max_attempts()
            ),
            MessageStyle::Info,
        );
    }

    fn announce_round(&mut self) {
        let round = self.session.round();
        let text = format!(
            "New round: {} attempts ({})",
            round.max_attempts(),
            round.difficulty()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn flush_store_warning(&mut self) {
        if let Some(warning) = self.session.take_store_warning() {
            self.add_message(&warning, MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "TUI event loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
{
    loop {
        let completed = terminal.draw(|f| rendering::ui(f, &app))?;
        app.board_area = rendering::board_area(completed.area);

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
