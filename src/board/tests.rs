use super::*;

#[test]
fn test_marker_opponent() {
    assert_eq!(Marker::X.opponent(), Marker::O);
    assert_eq!(Marker::O.opponent(), Marker::X);
}

#[test]
fn test_cell_marker_conversion() {
    assert_eq!(Cell::from(Marker::X), Cell::X);
    assert_eq!(Cell::from(Marker::O), Cell::O);
    assert_eq!(Cell::X.marker(), Some(Marker::X));
    assert_eq!(Cell::Empty.marker(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
    assert!(!Pos::is_valid(3, 0));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.marker_count(), 0);
    assert!((0..TOTAL_CELLS).all(|i| board.is_empty(i)));
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new();
    board.place(4, Marker::X);
    assert_eq!(board.get(4), Cell::X);
    assert!(!board.is_empty(4));
    assert_eq!(board.count(Marker::X), 1);
    assert_eq!(board.count(Marker::O), 0);

    board.clear(4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_out_of_range_is_not_empty() {
    let board = Board::new();
    assert!(!board.is_empty(9));
}

#[test]
fn test_display_numbers_empty_cells() {
    let mut board = Board::new();
    board.place(0, Marker::X);
    board.place(4, Marker::O);
    let text = board.to_string();
    let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n";
    assert_eq!(text, expected);
}
