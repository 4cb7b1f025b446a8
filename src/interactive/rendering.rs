//! TUI rendering with ratatui
//!
//! Board, absent letters, messages and status bar, in the dark or light theme.

use super::app::{App, MessageStyle};
use crate::core::{LetterOutcome, WORD_LENGTH};
use crate::output::formatters::absent_letters_list;
use crate::store::{KeyValueStore, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

const CELL_WIDTH: u16 = 5;
const CELL_GAP: u16 = 1;
const SPACED_ROW_STEP: u16 = 2;

/// Colors for one theme
struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
    correct: Color,
    misplaced: Color,
    absent: Color,
    empty: Color,
    active: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Reset,
            text: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            correct: Color::Green,
            misplaced: Color::Yellow,
            absent: Color::DarkGray,
            empty: Color::Black,
            active: Color::Blue,
        },
        Theme::Light => Palette {
            background: Color::White,
            text: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            correct: Color::LightGreen,
            misplaced: Color::LightYellow,
            absent: Color::Gray,
            empty: Color::Rgb(230, 230, 230),
            active: Color::LightBlue,
        },
    }
}

fn screen_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Absent letters
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area)
}

/// Area of the bordered board panel for a frame of size `area`
#[must_use]
pub fn board_area(area: Rect) -> Rect {
    screen_layout(area)[1]
}

/// Where the cells of the board are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGrid {
    pub rect: Rect,
    /// Terminal lines per board row: 2 with a spacer line, 1 when space is short
    pub row_step: u16,
}

impl BoardGrid {
    /// Top-left terminal position of a cell
    #[must_use]
    pub const fn cell_origin(&self, row: usize, cell: usize) -> (u16, u16) {
        (
            self.rect.x + cell as u16 * (CELL_WIDTH + CELL_GAP),
            self.rect.y + row as u16 * self.row_step,
        )
    }
}

/// The cell grid, centered inside the board panel
///
/// Rows are separated by a blank line when the panel is tall enough for all
/// of them, and packed together otherwise.
#[must_use]
pub fn board_grid(board_area: Rect, rows: usize) -> BoardGrid {
    let inner = Block::default().borders(Borders::ALL).inner(board_area);
    let cols = WORD_LENGTH as u16;
    let width = cols * CELL_WIDTH + (cols - 1) * CELL_GAP;

    let spaced_height = (rows as u16 * SPACED_ROW_STEP).saturating_sub(1);
    let row_step = if spaced_height <= inner.height {
        SPACED_ROW_STEP
    } else {
        1
    };
    let height = (rows as u16 * row_step).saturating_sub(row_step - 1);

    BoardGrid {
        rect: Rect::new(
            inner.x + inner.width.saturating_sub(width) / 2,
            inner.y + inner.height.saturating_sub(height) / 2,
            width.min(inner.width),
            height.min(inner.height),
        ),
        row_step,
    }
}

/// Map a terminal position to a `(row, cell)` of the board
///
/// Only rows that are actually drawn can be hit.
#[must_use]
pub fn hit_cell(board_area: Rect, rows: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    let grid = board_grid(board_area, rows);
    let dx = column.checked_sub(grid.rect.x)?;
    let dy = row.checked_sub(grid.rect.y)?;

    if dy >= grid.rect.height
        || dy % grid.row_step != 0
        || dx % (CELL_WIDTH + CELL_GAP) >= CELL_WIDTH
    {
        return None;
    }

    let (r, c) = (
        usize::from(dy / grid.row_step),
        usize::from(dx / (CELL_WIDTH + CELL_GAP)),
    );
    (r < rows && c < WORD_LENGTH).then_some((r, c))
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let colors = palette(app.session.preferences().theme);
    f.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        f.area(),
    );

    let chunks = screen_layout(f.area());

    render_header(f, &colors, chunks[0]);
    render_board(f, app, &colors, chunks[1]);
    render_absent_letters(f, app, &colors, chunks[2]);
    render_messages(f, app, &colors, chunks[3]);
    render_status(f, app, &colors, chunks[4]);

    if app.show_help {
        render_help(f, &colors);
    }
}

fn render_header(f: &mut Frame, colors: &Palette, area: Rect) {
    let header = Paragraph::new("🔤 PALPITE - Guess the word")
        .style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.accent)),
        );
    f.render_widget(header, area);
}

fn outcome_color(colors: &Palette, outcome: LetterOutcome) -> Color {
    match outcome {
        LetterOutcome::Correct => colors.correct,
        LetterOutcome::Misplaced => colors.misplaced,
        LetterOutcome::Absent => colors.absent,
    }
}

fn cell_span(letter: Option<char>, bg: Color, fg: Color) -> Span<'static> {
    Span::styled(
        format!("  {}  ", letter.unwrap_or(' ')),
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    )
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, colors: &Palette, area: Rect) {
    let round = app.session.round();
    let line = app.session.line();
    let rows = round.max_attempts();
    let grid = board_grid(area, rows);

    let mut lines = Vec::with_capacity(rows * 2);
    for r in 0..rows {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        for c in 0..WORD_LENGTH {
            if c > 0 {
                spans.push(Span::raw(" ".repeat(usize::from(CELL_GAP))));
            }

            let span = if let (Some(guess), Some(result)) =
                (round.guesses().get(r), round.results().get(r))
            {
                let bg = outcome_color(colors, result.outcomes()[c]);
                cell_span(Some(guess.char_at(c)), bg, Color::Black)
            } else if r == round.attempt_index() && app.session.accepts_input() {
                let bg = if c == line.cursor() {
                    colors.active
                } else {
                    colors.empty
                };
                cell_span(line.cells()[c], bg, colors.text)
            } else {
                cell_span(None, colors.empty, colors.text)
            };
            spans.push(span);
        }

        if r > 0 && grid.row_step > 1 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(format!(" Attempt {}/{} ", round.attempt_index(), rows))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), grid.rect);
}

fn render_absent_letters<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<S>,
    colors: &Palette,
    area: Rect,
) {
    let letters = app.session.round().absent_letters();
    let text = if letters.is_empty() {
        String::new()
    } else {
        absent_letters_list(letters)
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Absent letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, colors: &Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(colors.text),
                MessageStyle::Success => Style::default().fg(colors.correct),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, colors: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let round = app.session.round();
    let preferred = app.session.preferences().difficulty;
    let mode_text = if preferred == round.difficulty() {
        format!("Difficulty: {preferred}")
    } else {
        format!("Difficulty: {} → {preferred}", round.difficulty())
    };
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats = app.session.stats();
    let stats_text = match app.session.restart_pending(Instant::now()) {
        Some(left) => format!("Next round in {:.1}s", left.as_secs_f64()),
        None => format!(
            "Wins: {} | Losses: {} | {:.0}%",
            stats.wins,
            stats.losses,
            stats.win_rate()
        ),
    };
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("?: Help | ^N: New | ^T: Theme | F2-F4: Level | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.muted));
    f.render_widget(help, chunks[2]);
}

fn render_help(f: &mut Frame, colors: &Palette) {
    let area = centered_rect(f.area(), 60, 18);
    let swatch = |color: Color| {
        Span::styled(
            "  A  ",
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let content = vec![
        Line::from("Guess the hidden five-letter word."),
        Line::from("The number of attempts depends on the difficulty:"),
        Line::from("easy 8, medium 6, hard 4."),
        Line::from(""),
        Line::from(vec![
            swatch(colors.correct),
            Span::raw(" letter is in the word, in this position"),
        ]),
        Line::from(vec![
            swatch(colors.misplaced),
            Span::raw(" letter is in the word, elsewhere"),
        ]),
        Line::from(vec![
            swatch(colors.absent),
            Span::raw(" letter is not in the word"),
        ]),
        Line::from(""),
        Line::from("Type letters, Enter to submit, Backspace to erase."),
        Line::from("Left/Right or a mouse click choose the active cell."),
        Line::from("Ctrl+N new round, Ctrl+T theme, F2/F3/F4 difficulty."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(colors.muted),
        )),
    ];

    let help = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(colors.text).bg(colors.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
