use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::common::Cell;
use crate::config::INPUT_POLL_INTERVAL;
use crate::ui::dispatcher::MoveSubmitter;
use crate::ui::event_loop::{ClientUi, UiEvent};
use crate::ui::view::{BoardView, CellView, Marker};

/// Screen columns per board cell.
pub const CELL_WIDTH: u16 = 3;

/// Wide enough for the moves-left label next to the longest status text.
const STATUS_BAR_WIDTH: u16 = 44;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = ScreenGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the terminal front end on the calling thread until the user quits.
///
/// The terminal is restored even when setup or the loop fails.
pub fn run<S: MoveSubmitter>(ui: &mut ClientUi<S>, title: &str) -> anyhow::Result<()> {
    let guard = ScreenGuard::enter()?;
    let mut term = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = event_loop(&mut term, ui, title);

    drop(guard);
    term.show_cursor()?;
    result
}

fn event_loop<S: MoveSubmitter>(term: &mut Term, ui: &mut ClientUi<S>, title: &str) -> anyhow::Result<()> {
    let mut cursor = Cell::new(ui.view().rows() / 2, ui.view().cols() / 2);
    let mut board_area = Rect::default();

    while ui.pump() {
        term.draw(|f| board_area = render(f, ui.view(), cursor, title))?;

        if !event::poll(INPUT_POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    ui.queue().post(UiEvent::Quit);
                }
                KeyCode::Up => cursor = step(ui.view(), cursor, -1, 0),
                KeyCode::Down => cursor = step(ui.view(), cursor, 1, 0),
                KeyCode::Left => cursor = step(ui.view(), cursor, 0, -1),
                KeyCode::Right => cursor = step(ui.view(), cursor, 0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    ui.activate(cursor);
                }
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(cell) = hit_test(ui.view(), board_area, column, row) {
                    cursor = cell;
                    ui.activate(cell);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn step(view: &BoardView, cursor: Cell, dr: isize, dc: isize) -> Cell {
    let clamp = |v: usize, d: isize, len: usize| (v as isize + d).clamp(0, len as isize - 1) as usize;
    Cell::new(clamp(cursor.row(), dr, view.rows()), clamp(cursor.col(), dc, view.cols()))
}

/// Map a screen position to the grid cell drawn there by [`render`].
///
/// `board_area` is the rect `render` returned. Borders, and anything outside the
/// area (including cells clipped off a small terminal), map to `None`.
pub fn hit_test(view: &BoardView, board_area: Rect, column: u16, row: u16) -> Option<Cell> {
    let (x, y) = (board_area.x + 1, board_area.y + 1);
    let (right, bottom) = (
        board_area.right().saturating_sub(1),
        board_area.bottom().saturating_sub(1),
    );
    if column < x || row < y || column >= right || row >= bottom {
        return None;
    }
    let cell = Cell::new((row - y) as usize, ((column - x) / CELL_WIDTH) as usize);
    (cell.row() < view.rows() && cell.col() < view.cols()).then_some(cell)
}

fn cell_style(view: &CellView, selected: bool) -> Style {
    let base = match (view.marker, view.enabled) {
        (Marker::PlayerOne, _) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (Marker::PlayerTwo, _) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        (Marker::Empty, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (Marker::Empty, false) => Style::default().fg(Color::DarkGray),
    };
    if selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

/// Draw the board and status bar, returning where the board block landed.
///
/// Grid row `r` is screen line `r` inside the block; column `c` spans
/// [`CELL_WIDTH`] screen columns starting at `c * CELL_WIDTH`.
pub fn render(f: &mut Frame, view: &BoardView, cursor: Cell, title: &str) -> Rect {
    let board_width = view.cols() as u16 * CELL_WIDTH + 2;
    let board_height = view.rows() as u16 + 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(f.size());
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width.max(STATUS_BAR_WIDTH)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    let board_area = Rect {
        width: board_width.min(horizontal[1].width),
        ..horizontal[1]
    };

    let lines: Vec<Line> = (0..view.rows())
        .map(|r| {
            let spans: Vec<Span> = view
                .row(r)
                .iter()
                .map(|cv| {
                    let selected = cv.cell() == cursor;
                    Span::styled(format!(" {} ", cv.marker.glyph()), cell_style(cv, selected))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(board, board_area);

    let bar_area = Rect {
        x: horizontal[1].x,
        width: horizontal[1].width,
        ..vertical[2]
    };
    let bar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(bar_area);
    let labels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(bar[0]);
    f.render_widget(Paragraph::new(view.moves_left_text()), labels[0]);
    f.render_widget(
        Paragraph::new(view.status_text()).alignment(Alignment::Right),
        labels[1],
    );
    f.render_widget(
        Paragraph::new("arrows move, enter plays, q quits").style(Style::default().fg(Color::DarkGray)),
        bar[1],
    );

    board_area
}
