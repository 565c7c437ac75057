use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use reversi::ui::terminal::{hit_test, render, CELL_WIDTH};
use reversi::ui::view::BoardView;
use reversi::{
    BoardSnapshot, Cell, GameStatus, Occupancy, PLAYER_ONE_GLYPH, PLAYER_TWO_GLYPH,
};

/// 8x8 position with one disc per player at asymmetric cells.
struct Lopsided;

impl BoardSnapshot for Lopsided {
    fn rows(&self) -> usize {
        8
    }

    fn cols(&self) -> usize {
        8
    }

    fn contents(&self, cell: Cell) -> Occupancy {
        match (cell.row(), cell.col()) {
            (1, 3) => Occupancy::PlayerOne,
            (6, 0) => Occupancy::PlayerTwo,
            _ => Occupancy::Empty,
        }
    }

    fn is_valid_move(&self, _cell: Cell) -> bool {
        false
    }

    fn is_my_turn(&self) -> bool {
        false
    }

    fn moves_left(&self) -> usize {
        62
    }

    fn status(&self) -> GameStatus {
        GameStatus::InProgress
    }
}

fn lopsided_view() -> BoardView {
    let mut view = BoardView::new(&Lopsided);
    view.refresh(&Lopsided);
    view
}

/// Screen position of the glyph for `cell` inside `board_area`.
fn glyph_position(board_area: Rect, cell: Cell) -> (u16, u16) {
    (
        board_area.x + 1 + cell.col() as u16 * CELL_WIDTH + 1,
        board_area.y + 1 + cell.row() as u16,
    )
}

fn draw(view: &BoardView, width: u16, height: u16) -> (Terminal<TestBackend>, Rect) {
    let mut term = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut board_area = Rect::default();
    term.draw(|f| board_area = render(f, view, Cell::new(0, 0), " test "))
        .unwrap();
    (term, board_area)
}

fn line_text(term: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = term.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer.get(x, y).symbol())
        .collect()
}

#[test]
fn test_render_places_rows_on_lines_and_cols_across() {
    let view = lopsided_view();
    let (term, board_area) = draw(&view, 60, 20);
    let buffer = term.backend().buffer();

    assert_eq!(board_area.width, 8 * CELL_WIDTH + 2);
    assert_eq!(board_area.height, 8 + 2);

    let (x, y) = glyph_position(board_area, Cell::new(1, 3));
    assert_eq!(buffer.get(x, y).symbol(), PLAYER_ONE_GLYPH);
    let (x, y) = glyph_position(board_area, Cell::new(6, 0));
    assert_eq!(buffer.get(x, y).symbol(), PLAYER_TWO_GLYPH);

    // the transposed positions stay empty
    let (x, y) = glyph_position(board_area, Cell::new(3, 1));
    assert_ne!(buffer.get(x, y).symbol(), PLAYER_ONE_GLYPH);
    let (x, y) = glyph_position(board_area, Cell::new(0, 6));
    assert_ne!(buffer.get(x, y).symbol(), PLAYER_TWO_GLYPH);
}

#[test]
fn test_render_draws_status_bar_below_board() {
    let view = lopsided_view();
    let (term, board_area) = draw(&view, 60, 20);

    let bar = line_text(&term, board_area.bottom());
    assert!(bar.contains("Moves Left 62"), "bar was {:?}", bar);
    assert!(bar.contains(view.status_text()), "bar was {:?}", bar);
}

#[test]
fn test_hit_test_inverts_render() {
    let view = lopsided_view();
    let (_term, board_area) = draw(&view, 60, 20);

    let (x, y) = glyph_position(board_area, Cell::new(1, 3));
    assert_eq!(hit_test(&view, board_area, x, y), Some(Cell::new(1, 3)));
    // any column of the cell's span hits it
    assert_eq!(hit_test(&view, board_area, x - 1, y), Some(Cell::new(1, 3)));
    assert_eq!(hit_test(&view, board_area, x + 1, y), Some(Cell::new(1, 3)));

    for r in 0..view.rows() {
        for c in 0..view.cols() {
            let cell = Cell::new(r, c);
            let (x, y) = glyph_position(board_area, cell);
            assert_eq!(hit_test(&view, board_area, x, y), Some(cell));
        }
    }
}

#[test]
fn test_hit_test_ignores_borders_and_outside() {
    let view = lopsided_view();
    let (_term, board_area) = draw(&view, 60, 20);
    let (x, y) = glyph_position(board_area, Cell::new(1, 3));

    assert_eq!(hit_test(&view, board_area, x, board_area.y), None);
    assert_eq!(hit_test(&view, board_area, board_area.x, y), None);
    assert_eq!(hit_test(&view, board_area, board_area.right() - 1, y), None);
    assert_eq!(hit_test(&view, board_area, x, board_area.bottom() - 1), None);
    assert_eq!(hit_test(&view, board_area, x, board_area.bottom()), None);
    assert_eq!(hit_test(&view, board_area, board_area.right() + 5, y), None);
}

#[test]
fn test_hit_test_ignores_cells_clipped_off_screen() {
    let view = lopsided_view();
    // room for three columns and two rows inside the border
    let clipped = Rect::new(0, 0, 3 * CELL_WIDTH + 2, 4);

    assert_eq!(hit_test(&view, clipped, 1, 1), Some(Cell::new(0, 0)));
    assert_eq!(hit_test(&view, clipped, 1 + 2 * CELL_WIDTH, 2), Some(Cell::new(1, 2)));
    assert_eq!(hit_test(&view, clipped, 1 + 5 * CELL_WIDTH, 1), None);
    assert_eq!(hit_test(&view, clipped, 1, 3), None);
    assert_eq!(hit_test(&view, clipped, 1, 6), None);
}
