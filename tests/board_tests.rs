use reversi::{Board, BoardError, Cell, Occupancy, Player};

#[test]
fn test_standard_board_starting_position() {
    let board = Board::standard();
    assert_eq!(board.rows(), 8);
    assert_eq!(board.cols(), 8);
    assert_eq!(board.get(3, 3).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(4, 4).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(3, 4).unwrap(), Occupancy::PlayerTwo);
    assert_eq!(board.get(4, 3).unwrap(), Occupancy::PlayerTwo);
    assert_eq!(board.count(Occupancy::PlayerOne), 2);
    assert_eq!(board.count(Occupancy::PlayerTwo), 2);
    assert_eq!(board.empty_count(), 60);
    assert!(!board.is_over());
}

#[test]
fn test_opening_legal_moves() {
    let board = Board::standard();
    assert_eq!(
        board.legal_moves(Player::One),
        vec![Cell::new(2, 4), Cell::new(3, 5), Cell::new(4, 2), Cell::new(5, 3)]
    );
    assert_eq!(
        board.legal_moves(Player::Two),
        vec![Cell::new(2, 3), Cell::new(3, 2), Cell::new(4, 5), Cell::new(5, 4)]
    );
}

#[test]
fn test_place_flips_captured_disc() {
    let mut board = Board::standard();
    assert_eq!(board.place(2, 4, Player::One).unwrap(), 1);
    assert_eq!(board.get(2, 4).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(3, 4).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.count(Occupancy::PlayerOne), 4);
    assert_eq!(board.count(Occupancy::PlayerTwo), 1);
    assert_eq!(board.empty_count(), 59);
}

#[test]
fn test_flips_in_several_directions() {
    let mut board = Board::standard();
    board.place(2, 4, Player::One).unwrap();
    board.place(2, 3, Player::Two).unwrap();
    assert_eq!(board.get(3, 3).unwrap(), Occupancy::PlayerTwo);

    // east captures (4,3), north-east captures (3,3)
    let mut flips = board.flips(4, 2, Player::One).unwrap();
    flips.sort();
    assert_eq!(flips, vec![Cell::new(3, 3), Cell::new(4, 3)]);
    assert_eq!(board.place(4, 2, Player::One).unwrap(), 2);
    assert_eq!(board.get(3, 3).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(4, 3).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.count(Occupancy::PlayerTwo), 1);
}

#[test]
fn test_illegal_placements() {
    let mut board = Board::standard();
    assert_eq!(
        board.place(3, 3, Player::Two).unwrap_err(),
        BoardError::Occupied { row: 3, col: 3 }
    );
    assert_eq!(
        board.place(0, 0, Player::One).unwrap_err(),
        BoardError::NoFlips { row: 0, col: 0 }
    );
    assert_eq!(
        board.place(8, 0, Player::One).unwrap_err(),
        BoardError::OutOfBounds { row: 8, col: 0 }
    );
    assert!(!board.is_legal(8, 8, Player::One));
    assert_eq!(board, Board::standard());
}

#[test]
fn test_dimensions_are_validated() {
    assert_eq!(
        Board::new(7, 8).unwrap_err(),
        BoardError::InvalidDimensions { rows: 7, cols: 8 }
    );
    assert!(Board::new(2, 2).is_err());
    assert!(Board::new(18, 8).is_err());
    let board = Board::new(4, 6).unwrap();
    assert_eq!((board.rows(), board.cols()), (4, 6));
    assert_eq!(board.empty_count(), 24);
}

#[test]
fn test_empty_board_is_over_and_tied() {
    let board = Board::new(8, 8).unwrap();
    assert!(board.is_over());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_small_board_initializes_centre() {
    let mut board = Board::new(4, 4).unwrap();
    board.initialize();
    assert_eq!(board.get(1, 1).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(2, 2).unwrap(), Occupancy::PlayerOne);
    assert_eq!(board.get(1, 2).unwrap(), Occupancy::PlayerTwo);
    assert_eq!(board.get(2, 1).unwrap(), Occupancy::PlayerTwo);
}

#[test]
fn test_first_move_playout_reaches_consistent_end() {
    let mut board = Board::standard();
    let mut current = Player::One;
    while !board.is_over() {
        if let Some(cell) = board.legal_moves(current).first().copied() {
            board.place(cell.row(), cell.col(), current).unwrap();
        }
        current = current.opponent();
    }
    let one = board.count(Occupancy::PlayerOne);
    let two = board.count(Occupancy::PlayerTwo);
    assert_eq!(one + two + board.empty_count(), 64);
    let expected = match one.cmp(&two) {
        std::cmp::Ordering::Greater => Some(Player::One),
        std::cmp::Ordering::Less => Some(Player::Two),
        std::cmp::Ordering::Equal => None,
    };
    assert_eq!(board.winner(), expected);
}
