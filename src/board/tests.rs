use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.row, 1);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
    assert!(Pos::new(1, 2).in_bounds());
    assert!(!Pos::new(3, 0).in_bounds());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(1, 1), Mark::X));
    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert!(!board.is_empty(Pos::new(1, 1)));
    assert!(board.is_empty(Pos::new(0, 0)));
}

#[test]
fn test_place_occupied_rejected_without_mutation() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(0, 0), Mark::X));
    let before = board.clone();

    assert!(!board.place(Pos::new(0, 0), Mark::O));
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(0, 0)), Mark::X);
}

#[test]
fn test_place_out_of_range_rejected() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(!board.place(Pos::new(3, 0), Mark::X));
    assert!(!board.place(Pos::new(0, 3), Mark::O));
    assert_eq!(board, before);
}

#[test]
fn test_place_empty_mark_rejected() {
    let mut board = Board::new();
    assert!(!board.place(Pos::new(0, 0), Mark::Empty));
    assert!(board.is_board_empty());
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place(Pos::new(2, 1), Mark::O);
    board.clear(Pos::new(2, 1));
    assert!(board.is_empty(Pos::new(2, 1)));
}

#[test]
fn test_available_moves_row_major() {
    let mut board = Board::new();
    board.place(Pos::new(0, 1), Mark::X);
    board.place(Pos::new(1, 1), Mark::O);

    let moves = board.available_moves();
    let expected = [
        Pos::new(0, 0),
        Pos::new(0, 2),
        Pos::new(1, 0),
        Pos::new(1, 2),
        Pos::new(2, 0),
        Pos::new(2, 1),
        Pos::new(2, 2),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn test_available_plus_marks_is_total() {
    let mut board = Board::new();
    assert_eq!(board.available_moves().len() + board.mark_count(), TOTAL_CELLS);

    let mut mark = Mark::X;
    for idx in [4, 0, 8, 2] {
        board.place(Pos::from_index(idx), mark);
        mark = mark.opponent();
        assert_eq!(board.available_moves().len() + board.mark_count(), TOTAL_CELLS);
    }
}

#[test]
fn test_is_full_and_reset() {
    let mut board = Board::new();
    assert!(!board.is_full());

    let mut mark = Mark::X;
    for idx in 0..TOTAL_CELLS {
        board.place(Pos::from_index(idx), mark);
        mark = mark.opponent();
    }
    assert!(board.is_full());
    assert_eq!(board.available_moves().len(), 0);

    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board.available_moves().len(), TOTAL_CELLS);
}
