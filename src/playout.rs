//! Random legal play.
//!
//! A playout plays uniformly random legal moves for alternating sides until
//! two consecutive passes or a move limit. Moves that would fill one of the
//! mover's own single-point eyes are skipped so games come to an end.
//!
//! The random number generator is always passed in by the caller, so a given
//! seed reproduces the same game.

use fastrand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::notation::Move;
use crate::square::Square;
use crate::stone::Stone;

/// Check if a point is "eyeish" (surrounded by stones of one color).
///
/// Border and error cells are ignored. Returns the surrounding color, or
/// `Stone::Empty` if the point is not eyeish. This may be true for false eyes.
pub fn is_eyeish(board: &Board, sq: Square) -> Stone {
    let mut eyecolor = Stone::Empty;
    for nsq in sq.neighbors() {
        let c = board[nsq];
        if c == Stone::Empty {
            return Stone::Empty;
        }
        if !c.is_stone() {
            continue;
        }
        if eyecolor == Stone::Empty {
            eyecolor = c;
        } else if c != eyecolor {
            return Stone::Empty;
        }
    }
    eyecolor
}

/// Choose a random legal move for the side to move, or pass if none is left.
pub fn random_move(board: &Board, rng: &mut Rng) -> Square {
    let color = board.turn();
    let mut candidates: Vec<Square> = board
        .squares()
        .filter(|&sq| board[sq] == Stone::Empty && is_eyeish(board, sq) != color)
        .collect();

    // Draw candidates until a legal one turns up
    // (some candidates might be suicide or ko)
    while !candidates.is_empty() {
        let i = rng.usize(..candidates.len());
        let sq = candidates.swap_remove(i);
        if board.is_legal(sq, color) {
            return sq;
        }
    }
    Square::PASS
}

/// Play random moves on `board` until two passes in a row or `max_moves`.
///
/// Returns the moves played, passes included.
pub fn play_random_game(board: &mut Board, rng: &mut Rng, max_moves: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut passes = 0;

    while passes < 2 && moves.len() < max_moves {
        let color = board.turn();
        let sq = random_move(board, rng);
        if !board.make_move(sq, color) {
            break;
        }
        moves.push(Move::new(sq, color));
        passes = if sq.is_pass() { passes + 1 } else { 0 };
    }

    debug!(moves = moves.len(), passes, "playout finished");
    moves
}
