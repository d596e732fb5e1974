//! Go board representation and move execution.
//!
//! The board is a 1D array of [`Stone`] values over a padded grid: a ring of
//! [`Stone::Wall`] cells surrounds the playing area so neighbor offsets never
//! need bounds checks. A parallel array maps each occupied cell to the
//! [`GroupId`] of its chain; chains live in a [`GroupArena`] and keep their
//! liberties up to date as stones are placed and captured.
//!
//! Rules implemented here:
//! - Captures of opposing chains left without liberties
//! - Suicide rejection
//! - Simple ko (single-stone immediate recapture)

use std::fmt;
use std::ops::Index;

use tracing::{debug, trace};

use crate::constants::{is_valid_board_size, padded_len};
use crate::error::Error;
use crate::group::{GroupArena, GroupId, StoneGroup};
use crate::square::Square;
use crate::stone::Stone;

/// A Go position.
///
/// `Clone` copies the group arena and the per-cell group ids verbatim, so two
/// cells that share a chain in the source share the cloned chain in the copy.
#[derive(Clone, Debug)]
pub struct Board {
    board_size: usize,
    /// Cell colors, including the border ring.
    stones: Vec<Stone>,
    /// Chain of each cell; `None` exactly where the cell holds no stone.
    groups: Vec<Option<GroupId>>,
    arena: GroupArena,
    /// Side to move
    turn: Stone,
    /// Point forbidden for immediate recapture (`Square::EMPTY` if none)
    ko: Square,
    last_move: Square,
    /// Stones captured by Black and by White
    captures: [u32; 2],
    /// Stones removed by the latest placement
    removed: u32,
}

impl Board {
    /// Create an empty board with Black to move.
    pub fn new(board_size: usize) -> Result<Self, Error> {
        if !is_valid_board_size(board_size) {
            return Err(Error::InvalidBoardSize(board_size));
        }
        Ok(Self::blank(board_size))
    }

    /// Empty board for a size the caller already validated.
    pub(crate) fn blank(board_size: usize) -> Self {
        let len = padded_len(board_size);
        let mut stones = vec![Stone::Wall; len];
        for sq in Square::iter_board(board_size) {
            stones[sq.slot()] = Stone::Empty;
        }
        Board {
            board_size,
            stones,
            groups: vec![None; len],
            arena: GroupArena::new(),
            turn: Stone::Black,
            ko: Square::EMPTY,
            last_move: Square::EMPTY,
            captures: [0, 0],
            removed: 0,
        }
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Change the side to move. Switching sides clears the ko point.
    pub fn set_turn(&mut self, color: Stone) {
        if !color.is_stone() || color == self.turn {
            return;
        }
        self.turn = color;
        self.ko = Square::EMPTY;
    }

    #[inline]
    pub fn ko(&self) -> Square {
        self.ko
    }

    #[inline]
    pub fn last_move(&self) -> Square {
        self.last_move
    }

    /// Stones captured by Black.
    #[inline]
    pub fn black_captures(&self) -> u32 {
        self.captures[0]
    }

    /// Stones captured by White.
    #[inline]
    pub fn white_captures(&self) -> u32 {
        self.captures[1]
    }

    /// Stones captured by `color`.
    pub fn captures(&self, color: Stone) -> u32 {
        color.index().map_or(0, |i| self.captures[i])
    }

    pub(crate) fn set_captures(&mut self, black: u32, white: u32) {
        self.captures = [black, white];
    }

    /// Number of stones removed by the most recent placement.
    #[inline]
    pub fn removed(&self) -> u32 {
        self.removed
    }

    /// All points of the playing area, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        Square::iter_board(self.board_size)
    }

    /// Whether `sq` is a point of this board's playing area.
    pub fn contains(&self, sq: Square) -> bool {
        !sq.is_pass() && sq.board_size() == self.board_size && sq.is_ok()
    }

    /// Color at a 0-based column and row.
    pub fn stone(&self, col: usize, row: usize) -> Result<Stone, Error> {
        Square::new(col, row, self.board_size).map(|sq| self[sq])
    }

    /// Number of cells holding `color`.
    pub fn stone_count(&self, color: Stone) -> usize {
        self.squares().filter(|&sq| self[sq] == color).count()
    }

    /// The chain occupying `sq`, if any.
    pub fn group_at(&self, sq: Square) -> Option<&StoneGroup> {
        if !self.contains(sq) {
            return None;
        }
        self.groups[sq.slot()].and_then(|id| self.arena.get(id))
    }

    /// Handle of the chain occupying `sq`, if any.
    pub fn group_id(&self, sq: Square) -> Option<GroupId> {
        if !self.contains(sq) {
            return None;
        }
        self.groups[sq.slot()]
    }

    /// Every chain on the board.
    pub fn groups(&self) -> impl Iterator<Item = &StoneGroup> + '_ {
        self.arena.iter().map(|(_, g)| g)
    }

    fn group_mut(&mut self, id: GroupId) -> &mut StoneGroup {
        self.arena
            .get_mut(id)
            .expect("cell refers to a live group")
    }

    fn cell(&self, sq: Square) -> usize {
        assert_eq!(
            sq.board_size(),
            self.board_size,
            "square {sq:?} does not belong to a {0}x{0} board",
            self.board_size
        );
        sq.slot()
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    /// Put a `stone` on the empty point `sq`, merging chains and removing
    /// captured opposing chains.
    ///
    /// Performs no legality checks beyond the point being empty and the color
    /// being Black or White; returns `false` without side effects otherwise.
    pub fn place_stone(&mut self, sq: Square, stone: Stone) -> bool {
        let Some(color_index) = stone.index() else {
            return false;
        };
        if !self.contains(sq) || self.stones[sq.slot()] != Stone::Empty {
            return false;
        }

        let id = self.arena.insert(StoneGroup::new(sq));
        self.stones[sq.slot()] = stone;
        self.groups[sq.slot()] = Some(id);

        // Liberties: empty neighbors become ours, and `sq` stops being a
        // liberty of every neighboring chain.
        for nsq in sq.neighbors() {
            if self.stones[nsq.slot()] == Stone::Empty {
                self.group_mut(id).add_lib(nsq);
            } else if let Some(nid) = self.groups[nsq.slot()] {
                self.group_mut(nid).remove_lib(sq);
            }
        }

        // Connect with friendly chains.
        for nsq in sq.neighbors() {
            if self.stones[nsq.slot()] != stone {
                continue;
            }
            let Some(nid) = self.groups[nsq.slot()] else {
                continue;
            };
            if nid == id {
                continue;
            }
            if let Some(absorbed) = self.arena.remove(nid) {
                for s in absorbed.stones() {
                    self.groups[s.slot()] = Some(id);
                }
                self.group_mut(id).merge(&absorbed);
            }
        }

        self.removed = 0;

        // Capture opposing chains left without liberties.
        for nsq in sq.neighbors() {
            if self.stones[nsq.slot()] != stone.inv() {
                continue;
            }
            let dead = self
                .group_at(nsq)
                .is_some_and(|g| g.lib_count() == 0);
            if dead {
                let count = self.remove_group(nsq);
                self.removed += count;
            }
        }

        self.captures[color_index] += self.removed;
        trace!(square = %sq, %stone, removed = self.removed, "placed stone");
        true
    }

    /// Remove the whole chain at `sq` and give its points back as liberties
    /// to the chains around it. Returns the number of stones removed.
    fn remove_group(&mut self, sq: Square) -> u32 {
        let Some(id) = self.groups[sq.slot()] else {
            return 0;
        };
        let Some(group) = self.arena.remove(id) else {
            return 0;
        };

        for rsq in group.stones() {
            self.stones[rsq.slot()] = Stone::Empty;
            self.groups[rsq.slot()] = None;
        }
        for rsq in group.stones() {
            for nsq in rsq.neighbors() {
                if let Some(nid) = self.groups[nsq.slot()] {
                    self.group_mut(nid).add_lib(rsq);
                }
            }
        }

        debug!(at = %sq, stones = group.count(), "captured group");
        group.count() as u32
    }

    // -------------------------------------------------------------------------
    // Legality and moves
    // -------------------------------------------------------------------------

    /// Whether `color` may play at `sq`.
    ///
    /// Pass is always legal. A point is illegal when occupied, when it is the
    /// ko point, or when the stone would be left without liberties and
    /// capture nothing.
    pub fn is_legal(&self, sq: Square, color: Stone) -> bool {
        if sq.is_pass() {
            return true;
        }
        let (Some(own), Some(enemy)) = (color.index(), color.inv().index()) else {
            return false;
        };
        if !self.contains(sq) || sq == self.ko || self[sq] != Stone::Empty {
            return false;
        }

        // Count neighboring chains per color, and those in atari.
        let mut group_counts = [0usize; 2];
        let mut atari_counts = [0usize; 2];
        for nsq in sq.neighbors() {
            let stone = self.stones[nsq.slot()];
            if stone == Stone::Empty {
                return true;
            }
            let Some(i) = stone.index() else {
                continue;
            };
            group_counts[i] += 1;
            if self.group_at(nsq).is_some_and(|g| g.lib_count() == 1) {
                atari_counts[i] += 1;
            }
        }

        // Capturing an opposing chain in atari always frees a point, and a
        // friendly chain with a second liberty keeps the merged chain alive.
        atari_counts[enemy] > 0 || atari_counts[own] < group_counts[own]
    }

    /// Play `color` at `sq` (or pass), enforcing legality and ko.
    ///
    /// Returns `false` and leaves the board untouched when the move is illegal.
    pub fn make_move(&mut self, sq: Square, color: Stone) -> bool {
        if !color.is_stone() || !self.is_legal(sq, color) {
            return false;
        }

        if sq.is_pass() {
            self.ko = Square::EMPTY;
        } else {
            self.place_stone(sq, color);
            self.ko = Square::EMPTY;

            // A lone stone that captured a lone stone and has a single
            // liberty left can be retaken immediately: that liberty is ko.
            let ko = self
                .group_at(sq)
                .filter(|g| self.removed == 1 && g.count() == 1 && g.lib_count() == 1)
                .map(StoneGroup::last_liberty);
            if let Some(ko) = ko {
                debug!(%ko, "ko");
                self.ko = ko;
            }
        }

        self.turn = color.inv();
        self.last_move = sq;
        true
    }

    /// Play for the side to move.
    pub fn play(&mut self, sq: Square) -> bool {
        self.make_move(sq, self.turn)
    }

    /// Every legal non-pass move for `color`.
    pub fn legal_moves(&self, color: Stone) -> Vec<Square> {
        self.squares().filter(|&sq| self.is_legal(sq, color)).collect()
    }

    // -------------------------------------------------------------------------
    // Transforms
    // -------------------------------------------------------------------------

    /// The position rotated clockwise by `90 * times` degrees.
    ///
    /// Side to move, ko, last move and capture counts carry over.
    pub fn rotate(&self, times: i32) -> Board {
        let mut board = Board::blank(self.board_size);
        for sq in self.squares() {
            board.stones[sq.rotate(times).slot()] = self.stones[sq.slot()];
        }
        board.turn = self.turn;
        board.ko = self.ko.rotate(times);
        board.last_move = self.last_move.rotate(times);
        board.captures = self.captures;
        board.rebuild_groups();
        board
    }

    /// The position rotated by 180 degrees.
    pub fn inv(&self) -> Board {
        self.rotate(2)
    }

    /// Recompute every chain from the cell colors.
    ///
    /// Used after cells were written directly (position records, rotation).
    pub(crate) fn rebuild_groups(&mut self) {
        self.arena.clear();
        self.groups.fill(None);

        for start in Square::iter_board(self.board_size) {
            let color = self.stones[start.slot()];
            if !color.is_stone() || self.groups[start.slot()].is_some() {
                continue;
            }

            let id = self.arena.insert(StoneGroup::new(start));
            self.groups[start.slot()] = Some(id);
            let mut group = StoneGroup::new(start);
            let mut stack = vec![start];

            while let Some(sq) = stack.pop() {
                for nsq in sq.neighbors() {
                    let n = nsq.slot();
                    match self.stones[n] {
                        Stone::Empty => group.add_lib(nsq),
                        c if c == color && self.groups[n].is_none() => {
                            self.groups[n] = Some(id);
                            group.add_stone(nsq);
                            stack.push(nsq);
                        }
                        _ => {}
                    }
                }
            }
            *self.group_mut(id) = group;
        }
    }

    pub(crate) fn set_cell(&mut self, sq: Square, stone: Stone) {
        let cell = self.cell(sq);
        self.stones[cell] = stone;
    }
}

impl Index<Square> for Board {
    type Output = Stone;

    fn index(&self, sq: Square) -> &Stone {
        &self.stones[self.cell(sq)]
    }
}

/// Boards are equal when size, side to move and every cell match.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.board_size == other.board_size
            && self.turn == other.turn
            && self.stones == other.stones
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.board_size {
            write!(f, "{:>2}", x + 1)?;
        }
        writeln!(f)?;

        for y in 0..self.board_size {
            write!(f, "{:>2}", y + 1)?;
            for x in 0..self.board_size {
                let sign = match self[Square::at(x, y, self.board_size)] {
                    Stone::Empty => " +",
                    Stone::Black => " @",
                    Stone::White => " O",
                    _ => " E",
                };
                write!(f, "{sign}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", self.turn)
    }
}
