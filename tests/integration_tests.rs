//! Integration tests for go-engine
//!
//! Scenario tests that drive the public API the way a front end would:
//! game records in the three notations, captures, suicide and ko.

use go_engine::{Board, Move, Square, Stone};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn sq(col: usize, row: usize, size: usize) -> Square {
    Square::new(col, row, size).unwrap()
}

/// Play `(col, row)` points for alternating sides starting with Black.
fn setup_position(size: usize, moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &(col, row) in moves {
        let pt = sq(col, row, size);
        assert!(board.play(pt), "move {pt} should be legal");
    }
    board
}

/// Replay a `;`-separated SGF move list, checking the side to move each time.
/// With `clone_each_move` the game continues on a fresh clone after every move.
fn replay_sgf(size: usize, record: &str, clone_each_move: bool) -> Board {
    let mut board = Board::new(size).unwrap();
    for node in record.split(';').filter(|s| !s.is_empty()) {
        let mv = Move::parse_sgf(node, size).unwrap();
        assert!(!mv.square.is_empty());
        assert_eq!(board.turn(), mv.stone, "wrong side to move at {node}");
        assert!(mv.play_on(&mut board), "move {node} should be legal");
        if clone_each_move {
            board = board.clone();
        }
    }
    board
}

const GAME_11X11: &str = ";B[dd];W[cc];B[cd];W[dc];B[ec];W[eb];B[fb];W[fc];B[ed];W[gb]\
                          ;B[db];W[fa];B[cb];W[bc];B[bb];W[bd];B[be];W[ce];B[ad];W[bf]\
                          ;B[ac]";

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_single_stone_capture_5x5() {
    let mut board = Board::new(5).unwrap();
    assert!(board.place_stone(sq(2, 2, 5), Stone::White));
    for (c, r) in [(1, 2), (3, 2), (2, 1)] {
        assert!(board.place_stone(sq(c, r, 5), Stone::Black));
    }
    assert_eq!(board.group_at(sq(2, 2, 5)).unwrap().lib_count(), 1);

    assert!(board.make_move(sq(2, 3, 5), Stone::Black));
    assert_eq!(board[sq(2, 2, 5)], Stone::Empty);
    assert_eq!(board.black_captures(), 1);
    assert_eq!(board.white_captures(), 0);
    assert!(board.group_at(sq(2, 2, 5)).is_none());
    // The capturing stone has 3 liberties, so no ko.
    assert_eq!(board.ko(), Square::EMPTY);
}

#[test]
fn test_game_record_with_captures() {
    let board = replay_sgf(11, GAME_11X11, false);
    assert_eq!(board.stone(1, 2).unwrap(), Stone::Empty);
    assert_eq!(board.stone(1, 3).unwrap(), Stone::Empty);
    assert_eq!(board.stone(2, 2).unwrap(), Stone::Empty);
    assert_eq!(board.stone(3, 2).unwrap(), Stone::Empty);
    assert_eq!(board.stone(5, 1).unwrap(), Stone::Empty);
}

#[test]
fn test_game_record_cloning_every_move() {
    let plain = replay_sgf(11, GAME_11X11, false);
    let cloned = replay_sgf(11, GAME_11X11, true);
    assert_eq!(plain, cloned);
    assert_eq!(plain.to_fen(), cloned.to_fen());
    assert_eq!(plain.ko(), cloned.ko());
}

#[test]
fn test_japanese_record() {
    let size = 5;
    let mut board = Board::new(size).unwrap();
    for text in ["B3-3", "W3-2", "B2-2", "W4-3", "B4-2", "W2-3", "B3-1"] {
        let mv = Move::parse_japanese(text, size).unwrap();
        assert!(mv.play_on(&mut board), "move {text} should be legal");
    }
    // White's 3-2 stone is captured by 3-1.
    assert_eq!(board[sq(2, 1, 5)], Stone::Empty);
    assert_eq!(board.black_captures(), 1);
    assert_eq!(board.last_move().to_japanese(), "3-1");
}

#[test]
fn test_gtp_record() {
    let size = 9;
    let mut board = Board::new(size).unwrap();
    for text in ["B A2", "W J9", "B B1", "W pass", "B A1"] {
        let mv = Move::parse_gtp(text, size).unwrap();
        assert!(mv.play_on(&mut board), "move {text} should be legal");
    }
    // Black fills its own corner eye.
    assert_eq!(board.stone_count(Stone::Black), 3);
    assert_eq!(board.last_move().to_gtp().as_deref(), Some("A1"));
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_in_corner() {
    // Black A2 and B1 (GTP) leave A1 with no liberties for White.
    let mut board = Board::new(9).unwrap();
    for text in ["A2", "J9", "B1"] {
        assert!(board.play(Square::parse_gtp(text, 9).unwrap()));
    }
    let corner = Square::parse_gtp("A1", 9).unwrap();
    assert_eq!(board.turn(), Stone::White);
    assert!(!board.is_legal(corner, Stone::White));
    assert!(!board.play(corner));
    assert_eq!(board[corner], Stone::Empty);
    // Black may still fill its own eye.
    assert!(board.is_legal(corner, Stone::Black));
}

#[test]
fn test_multi_stone_suicide() {
    // White chain of two in the corner with its last liberty at (1,0).
    let board = Board::from_fen("5 W1B2/WB3/B4/5/5 W").unwrap();
    // White (1,0) would connect to the chain and leave it with no liberties.
    assert!(!board.is_legal(sq(1, 0, 5), Stone::White));
    // Black (1,0) captures the chain.
    assert!(board.is_legal(sq(1, 0, 5), Stone::Black));
}

#[test]
fn test_connecting_to_chain_with_spare_liberty_is_legal() {
    let board = Board::from_fen("5 W1B2/W4/B4/5/5 W").unwrap();
    // The chain keeps (1,1) as a liberty.
    assert!(board.is_legal(sq(1, 0, 5), Stone::White));
}

// =============================================================================
// Ko
// =============================================================================

/// Canonical ko around the center of a 9x9 board:
///
/// ```text
///   . B W .
///   B W . W
///   . B W .
/// ```
/// after which Black captures at (5,4).
fn ko_position() -> Board {
    setup_position(
        9,
        &[
            (4, 3),
            (5, 3),
            (3, 4),
            (6, 4),
            (4, 5),
            (5, 5),
            (8, 8),
            (4, 4),
        ],
    )
}

#[test]
fn test_ko_9x9() {
    let mut board = ko_position();
    assert!(board.play(sq(5, 4, 9)));
    assert_eq!(board[sq(4, 4, 9)], Stone::Empty);
    assert_eq!(board.black_captures(), 1);

    // Immediate recapture is forbidden.
    assert_eq!(board.ko(), sq(4, 4, 9));
    assert!(!board.is_legal(sq(4, 4, 9), Stone::White));
    assert!(!board.play(sq(4, 4, 9)));

    // White plays elsewhere; the ko point is released.
    assert!(board.play(sq(0, 0, 9)));
    assert_eq!(board.ko(), Square::EMPTY);
    assert!(board.is_legal(sq(4, 4, 9), Stone::White));

    // Black ignores it and White retakes, creating the mirrored ko.
    assert!(board.play(sq(8, 7, 9)));
    assert!(board.play(sq(4, 4, 9)));
    assert_eq!(board[sq(5, 4, 9)], Stone::Empty);
    assert_eq!(board.white_captures(), 1);
    assert_eq!(board.ko(), sq(5, 4, 9));
    assert!(!board.is_legal(sq(5, 4, 9), Stone::Black));
}

#[test]
fn test_pass_clears_ko() {
    let mut board = ko_position();
    board.play(sq(5, 4, 9));
    assert_eq!(board.ko(), sq(4, 4, 9));
    assert!(board.play(Square::PASS));
    assert_eq!(board.ko(), Square::EMPTY);
    assert_eq!(board.last_move(), Square::PASS);
    assert_eq!(board.turn(), Stone::Black);
}

#[test]
fn test_ko_survives_clone_and_record() {
    let mut board = ko_position();
    board.play(sq(5, 4, 9));

    let copy = board.clone();
    assert_eq!(copy.ko(), sq(4, 4, 9));
    assert!(!copy.is_legal(sq(4, 4, 9), Stone::White));

    // Rotation moves the ko point with the stones.
    let rotated = board.rotate(1);
    assert_eq!(rotated.ko(), sq(4, 4, 9).rotate(1));
    assert!(!rotated.is_legal(rotated.ko(), Stone::White));
}

// =============================================================================
// Bookkeeping
// =============================================================================

#[test]
fn test_stone_conservation_scripted() {
    let board = replay_sgf(11, GAME_11X11, false);
    // 11 Black moves and 10 White moves, no passes.
    assert_eq!(
        board.stone_count(Stone::Black) as u32 + board.white_captures(),
        11
    );
    assert_eq!(
        board.stone_count(Stone::White) as u32 + board.black_captures(),
        10
    );
}

#[test]
fn test_record_roundtrip_after_game() {
    let board = replay_sgf(11, GAME_11X11, false);
    let restored = Board::from_fen(&board.to_fen()).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.black_captures(), board.black_captures());
    assert_eq!(restored.white_captures(), board.white_captures());
}
