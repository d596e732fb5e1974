//! Constants for board geometry and engine limits.
//!
//! The board is stored as a 1D array with a one-point border ring on every
//! side, so a board of size `N` occupies `(N + 2) * (N + 2)` cells. The border
//! absorbs all neighbor arithmetic: stepping off the playing area always lands
//! on a wall cell rather than outside the array.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 27;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest board addressable with GTP vertices (A-Z without I).
pub const MAX_GTP_BOARD_SIZE: usize = 25;

/// Width of the padded grid for a board of the given size.
#[inline]
pub const fn padded_width(board_size: usize) -> usize {
    board_size + 2
}

/// Number of cells in the padded grid for a board of the given size.
#[inline]
pub const fn padded_len(board_size: usize) -> usize {
    padded_width(board_size) * padded_width(board_size)
}

/// Whether a board size is odd and within the supported range.
#[inline]
pub const fn is_valid_board_size(board_size: usize) -> bool {
    board_size >= MIN_BOARD_SIZE && board_size <= MAX_BOARD_SIZE && board_size % 2 == 1
}

/// Offsets to the 4 orthogonal neighbors in the padded array.
/// Order: West, North, East, South.
#[inline]
pub const fn dir4(board_size: usize) -> [isize; 4] {
    let w = padded_width(board_size) as isize;
    [-1, -w, 1, w]
}

// =============================================================================
// Game Limits
// =============================================================================

/// Maximum random game length as a multiple of the board area.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Maximum random game length for a board of the given size.
#[inline]
pub const fn max_game_len(board_size: usize) -> usize {
    board_size * board_size * MAX_GAME_LEN_FACTOR
}
