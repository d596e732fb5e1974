//! Board coordinates.
//!
//! A [`Square`] is an index into the padded 1D grid of a board of a given size,
//! paired with that size. Columns and rows are 0-based from the top-left
//! corner. Two sentinel values exist: [`Square::EMPTY`] ("no square") and
//! [`Square::PASS`].
//!
//! Three textual encodings are supported:
//! - SGF: `[cd]` (column letter, row letter), pass is `[]`
//! - Japanese: `3-4` (1-based column, row), pass is `PASS`
//! - GTP: `C16` (column letter skipping `I`, row counted from the bottom edge)

use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::{dir4, is_valid_board_size, padded_len, padded_width};
use crate::error::Error;

/// A point on the board, or one of the two sentinels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    index: isize,
    board_size: usize,
}

fn check_board_size(board_size: usize) -> Result<(), Error> {
    if is_valid_board_size(board_size) {
        Ok(())
    } else {
        Err(Error::InvalidBoardSize(board_size))
    }
}

impl Square {
    /// No square at all (no ko, no last move).
    pub const EMPTY: Square = Square {
        index: 0,
        board_size: 0,
    };

    /// The pass move.
    pub const PASS: Square = Square {
        index: -1,
        board_size: 0,
    };

    /// Create a square from a 0-based column and row.
    pub fn new(col: usize, row: usize, board_size: usize) -> Result<Self, Error> {
        check_board_size(board_size)?;
        if col >= board_size {
            return Err(Error::ColumnOutOfRange {
                col,
                size: board_size,
            });
        }
        if row >= board_size {
            return Err(Error::RowOutOfRange {
                row,
                size: board_size,
            });
        }
        Ok(Self::at(col, row, board_size))
    }

    /// Create a square from a raw index into the padded grid.
    ///
    /// Border indices are accepted; such squares report `is_ok() == false`.
    pub fn from_index(index: isize, board_size: usize) -> Result<Self, Error> {
        check_board_size(board_size)?;
        if index < 0 || index as usize >= padded_len(board_size) {
            return Err(Error::IndexOutOfRange {
                index,
                size: board_size,
            });
        }
        Ok(Square { index, board_size })
    }

    /// All points of a board, row by row from the top-left corner.
    pub fn all(board_size: usize) -> Result<Vec<Square>, Error> {
        check_board_size(board_size)?;
        Ok(Self::iter_board(board_size).collect())
    }

    /// Unchecked constructor for callers that already validated the inputs.
    #[inline]
    pub(crate) fn at(col: usize, row: usize, board_size: usize) -> Self {
        Square {
            index: ((row + 1) * padded_width(board_size) + col + 1) as isize,
            board_size,
        }
    }

    pub(crate) fn iter_board(board_size: usize) -> impl Iterator<Item = Square> {
        (0..board_size)
            .flat_map(move |row| (0..board_size).map(move |col| Square::at(col, row, board_size)))
    }

    /// Index into the padded grid.
    #[inline]
    pub fn index(self) -> isize {
        self.index
    }

    /// Index as an array slot. Panics for the pass sentinel.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        assert!(self.index >= 0, "pass has no board slot");
        self.index as usize
    }

    /// Board size this square belongs to (0 for sentinels).
    #[inline]
    pub fn board_size(self) -> usize {
        self.board_size
    }

    /// 0-based column, or -1 for sentinels.
    pub fn col(self) -> i32 {
        if self.board_size == 0 {
            return -1;
        }
        (self.index % padded_width(self.board_size) as isize) as i32 - 1
    }

    /// 0-based row, or -1 for sentinels.
    pub fn row(self) -> i32 {
        if self.board_size == 0 {
            return -1;
        }
        (self.index / padded_width(self.board_size) as isize) as i32 - 1
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Square::EMPTY
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        self.index < 0
    }

    /// Whether this is a pass or a point inside the playing area.
    pub fn is_ok(self) -> bool {
        if self.is_pass() {
            return true;
        }
        self.is_on_board()
    }

    fn is_on_board(self) -> bool {
        if !is_valid_board_size(self.board_size) {
            return false;
        }
        let n = self.board_size as i32;
        (0..n).contains(&self.col()) && (0..n).contains(&self.row())
    }

    /// Rotate clockwise by `90 * times` degrees. Any integer is accepted.
    ///
    /// Sentinels and border squares are returned unchanged.
    pub fn rotate(self, times: i32) -> Square {
        if !self.is_on_board() {
            return self;
        }
        let n = self.board_size;
        let col = self.col() as usize;
        let row = self.row() as usize;
        match times.rem_euclid(4) {
            0 => self,
            1 => Square::at(n - row - 1, col, n),
            2 => Square::at(n - col - 1, n - row - 1, n),
            _ => Square::at(row, n - col - 1, n),
        }
    }

    /// Rotate by 180 degrees.
    pub fn inv(self) -> Square {
        self.rotate(2)
    }

    /// The 4 orthogonal neighbors, in `dir4` order.
    #[inline]
    pub fn neighbors(self) -> [Square; 4] {
        dir4(self.board_size).map(|d| self + d)
    }

    fn offset(self, delta: isize) -> Square {
        let index = self.index + delta;
        assert!(
            self.board_size != 0 && index >= 0 && (index as usize) < padded_len(self.board_size),
            "offset {delta} from square {} leaves the padded grid",
            self.index
        );
        Square {
            index,
            board_size: self.board_size,
        }
    }

    // -------------------------------------------------------------------------
    // SGF
    // -------------------------------------------------------------------------

    /// SGF property value, e.g. `[cd]`. Pass is `[]`; the empty square and
    /// border cells give `""`.
    pub fn to_sgf(self) -> String {
        if self.is_pass() {
            return "[]".into();
        }
        if !self.is_on_board() {
            return String::new();
        }
        format!(
            "[{}{}]",
            sgf_char(self.col() as usize),
            sgf_char(self.row() as usize)
        )
    }

    /// Parse an SGF point, with or without brackets.
    ///
    /// `[]` is a pass, and so is `tt` on boards up to 19x19.
    pub fn parse_sgf(text: &str, board_size: usize) -> Result<Square, Error> {
        check_board_size(board_size)?;
        let invalid = || Error::InvalidNotation(text.to_string());
        if text == "[]" {
            return Ok(Square::PASS);
        }
        let body = text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(text);
        if body == "tt" && board_size <= 19 {
            return Ok(Square::PASS);
        }
        let mut chars = body.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = sgf_value(c).ok_or_else(invalid)?;
        let row = sgf_value(r).ok_or_else(invalid)?;
        Square::new(col, row, board_size)
    }

    // -------------------------------------------------------------------------
    // Japanese
    // -------------------------------------------------------------------------

    /// Japanese style `col-row`, 1-based. Pass is `PASS`.
    pub fn to_japanese(self) -> String {
        if self.is_pass() {
            return "PASS".into();
        }
        if !self.is_on_board() {
            return String::new();
        }
        format!("{}-{}", self.col() + 1, self.row() + 1)
    }

    pub fn parse_japanese(text: &str, board_size: usize) -> Result<Square, Error> {
        check_board_size(board_size)?;
        let invalid = || Error::InvalidNotation(text.to_string());
        if text.eq_ignore_ascii_case("pass") {
            return Ok(Square::PASS);
        }
        let (col, row) = text.split_once('-').ok_or_else(invalid)?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        if col == 0 || row == 0 {
            return Err(invalid());
        }
        Square::new(col - 1, row - 1, board_size)
    }

    // -------------------------------------------------------------------------
    // GTP
    // -------------------------------------------------------------------------

    /// GTP vertex, e.g. `D4`. Columns skip `I` and rows count from the bottom.
    ///
    /// Returns `None` for the empty square, border cells and columns past `Z`.
    pub fn to_gtp(self) -> Option<String> {
        if self.is_pass() {
            return Some("pass".into());
        }
        if !self.is_on_board() {
            return None;
        }
        let col = self.col() as u8;
        // A-H, then J-Z.
        let letter = if col >= 8 { col + 1 } else { col };
        if letter >= 26 {
            return None;
        }
        let row = self.board_size as i32 - self.row();
        Some(format!("{}{row}", (b'A' + letter) as char))
    }

    /// Parse a GTP vertex such as `D4` or `pass`.
    pub fn parse_gtp(text: &str, board_size: usize) -> Result<Square, Error> {
        check_board_size(board_size)?;
        let invalid = || Error::InvalidNotation(text.to_string());
        if text.eq_ignore_ascii_case("pass") {
            return Ok(Square::PASS);
        }

        let mut chars = text.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !letter.is_ascii_uppercase() || letter == 'I' {
            return Err(invalid());
        }

        let raw_row: usize = digits.parse().map_err(|_| invalid())?;
        if raw_row == 0 || raw_row > board_size {
            return Err(Error::RowOutOfRange {
                row: raw_row,
                size: board_size,
            });
        }

        // Skip 'I' column (Go convention to avoid confusion with 'J')
        let mut col = (letter as u8 - b'A') as usize;
        if letter > 'I' {
            col -= 1;
        }
        Square::new(col, board_size - raw_row, board_size)
    }
}

/// SGF coordinate letter: `a`-`z`, then `A`-`Z`.
fn sgf_char(v: usize) -> char {
    if v < 26 {
        (b'a' + v as u8) as char
    } else {
        (b'A' + (v - 26) as u8) as char
    }
}

fn sgf_value(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 26),
        _ => None,
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::EMPTY
    }
}

impl Add<isize> for Square {
    type Output = Square;

    fn add(self, offset: isize) -> Square {
        self.offset(offset)
    }
}

impl Sub<isize> for Square {
    type Output = Square;

    fn sub(self, offset: isize) -> Square {
        self.offset(-offset)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sgf())
    }
}
