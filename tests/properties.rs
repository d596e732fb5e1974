//! Randomized checks of board invariants.
//!
//! Every test replays seeded random games, so failures are reproducible from
//! the seed printed in the assertion message.

use fastrand::Rng;
use go_engine::playout::random_move;
use go_engine::{Board, Square, Stone};

const SIZES: [usize; 4] = [5, 7, 9, 13];
const SEEDS: u64 = 12;

/// Play one seeded random game, calling `check` on the board after every move.
fn for_each_position(size: usize, seed: u64, mut check: impl FnMut(&Board)) -> Board {
    let mut board = Board::new(size).unwrap();
    let mut rng = Rng::with_seed(seed);
    let mut passes = 0;
    let limit = size * size * 3;

    for _ in 0..limit {
        let sq = random_move(&board, &mut rng);
        assert!(board.play(sq), "seed {seed}: random move {sq} rejected");
        check(&board);
        passes = if sq.is_pass() { passes + 1 } else { 0 };
        if passes == 2 {
            break;
        }
    }
    board
}

fn sorted_stones(board: &Board, sq: Square) -> Vec<Square> {
    let mut stones: Vec<Square> = board.group_at(sq).unwrap().stones().collect();
    stones.sort();
    stones
}

fn liberties(board: &Board, sq: Square) -> Vec<Square> {
    board.group_at(sq).unwrap().liberties().collect()
}

#[test]
fn test_stones_are_conserved() {
    for size in SIZES {
        for seed in 0..SEEDS {
            let mut board = Board::new(size).unwrap();
            let mut rng = Rng::with_seed(seed);
            let mut placed = [0u32; 2];

            for _ in 0..size * size * 3 {
                let color = board.turn();
                let sq = random_move(&board, &mut rng);
                assert!(board.play(sq));
                if !sq.is_pass() {
                    placed[color.index().unwrap()] += 1;
                }

                let black = board.stone_count(Stone::Black) as u32;
                let white = board.stone_count(Stone::White) as u32;
                assert_eq!(black + board.white_captures(), placed[0], "seed {seed}");
                assert_eq!(white + board.black_captures(), placed[1], "seed {seed}");
            }
        }
    }
}

#[test]
fn test_chains_match_a_fresh_rebuild() {
    for size in SIZES {
        for seed in 0..SEEDS {
            for_each_position(size, seed, |board| {
                let rebuilt = Board::from_fen(&board.to_fen()).unwrap();
                for sq in board.squares() {
                    match board[sq] {
                        Stone::Black | Stone::White => {
                            assert_eq!(sorted_stones(board, sq), sorted_stones(&rebuilt, sq));
                            assert_eq!(
                                liberties(board, sq),
                                liberties(&rebuilt, sq),
                                "seed {seed}: liberties of {sq}"
                            );
                            assert!(board.group_at(sq).unwrap().lib_count() > 0);
                        }
                        _ => assert!(board.group_at(sq).is_none()),
                    }
                }
                assert_eq!(board.groups().count(), rebuilt.groups().count());
            });
        }
    }
}

#[test]
fn test_position_record_roundtrips() {
    for size in SIZES {
        for seed in 0..SEEDS {
            for_each_position(size, seed, |board| {
                let text = board.to_fen();
                let restored = Board::from_fen(&text).unwrap();
                assert_eq!(&restored, board, "seed {seed}: {text}");
                assert_eq!(restored.to_fen(), text);
                assert_eq!(restored.black_captures(), board.black_captures());
                assert_eq!(restored.white_captures(), board.white_captures());
            });
        }
    }
}

#[test]
fn test_rotation_laws_hold() {
    for size in SIZES {
        for seed in 0..SEEDS / 2 {
            let board = for_each_position(size, seed, |_| {});
            assert_eq!(board.rotate(4), board);
            assert_eq!(board.rotate(0), board);
            assert_eq!(board.inv().inv(), board);
            for k in 1..4 {
                assert_eq!(board.rotate(k).rotate(4 - k), board, "seed {seed} k {k}");
                assert_eq!(board.rotate(-k), board.rotate(4 - k));
            }
        }
    }
}

#[test]
fn test_legality_is_rotation_invariant() {
    for seed in 0..SEEDS {
        for_each_position(9, seed, |board| {
            let rotated = board.rotate(1);
            for sq in board.squares() {
                for color in [Stone::Black, Stone::White] {
                    assert_eq!(
                        board.is_legal(sq, color),
                        rotated.is_legal(sq.rotate(1), color),
                        "seed {seed}: {color} at {sq}"
                    );
                }
            }
        });
    }
}

#[test]
fn test_legality_matches_simulation() {
    for size in SIZES {
        for seed in 0..SEEDS {
            for_each_position(size, seed, |board| {
                for sq in board.squares() {
                    if board[sq] != Stone::Empty {
                        continue;
                    }
                    for color in [Stone::Black, Stone::White] {
                        let mut trial = board.clone();
                        let survives = trial.place_stone(sq, color)
                            && trial.group_at(sq).is_some_and(|g| g.lib_count() > 0);
                        let expected = survives && sq != board.ko();
                        assert_eq!(
                            board.is_legal(sq, color),
                            expected,
                            "seed {seed}: {color} at {sq} in {}",
                            board.to_fen()
                        );
                    }
                }
            });
        }
    }
}

#[test]
fn test_clones_are_independent() {
    for seed in 0..SEEDS {
        let mut rng = Rng::with_seed(seed + 1000);
        let original = for_each_position(9, seed, |_| {});
        let snapshot = original.to_fen();

        let mut copy = original.clone();
        for _ in 0..20 {
            let sq = random_move(&copy, &mut rng);
            copy.play(sq);
        }

        assert_eq!(original.to_fen(), snapshot, "seed {seed}");
        for sq in original.squares() {
            if let Some(group) = original.group_at(sq) {
                assert!(group.contains(sq));
                assert!(group.lib_count() > 0);
            }
        }
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    for seed in 0..SEEDS {
        for_each_position(7, seed, |board| {
            let color = board.turn();
            for sq in board.squares() {
                if board.is_legal(sq, color) {
                    continue;
                }
                let mut trial = board.clone();
                assert!(!trial.make_move(sq, color));
                assert_eq!(&trial, board);
                assert_eq!(trial.ko(), board.ko());
                assert_eq!(trial.last_move(), board.last_move());
            }
        });
    }
}
