//! Move notation: a color plus a point, read from and written to text.
//!
//! - SGF: `B[cd]`, `;W[]` (pass)
//! - Japanese: `B7-3`, `WPASS`
//! - GTP: `B D4`, `white pass`

use std::fmt;

use crate::board::Board;
use crate::square::Square;
use crate::stone::Stone;

/// A move of one color, as carried by game records and protocols.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub square: Square,
    pub stone: Stone,
}

impl Move {
    pub fn new(square: Square, stone: Stone) -> Self {
        Self { square, stone }
    }

    pub fn pass(stone: Stone) -> Self {
        Self::new(Square::PASS, stone)
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.square.is_pass()
    }

    /// Parse an SGF move node such as `B[cd]` or `;W[]`.
    pub fn parse_sgf(text: &str, board_size: usize) -> Option<Move> {
        let text = text.trim();
        let text = text.strip_prefix(';').unwrap_or(text).trim_start();
        let mut chars = text.chars();
        let stone = color_from_letter(chars.next()?)?;
        let point = chars.as_str();
        if !point.starts_with('[') {
            return None;
        }
        let square = Square::parse_sgf(point, board_size).ok()?;
        Some(Move::new(square, stone))
    }

    /// SGF move node, e.g. `B[cd]`.
    ///
    /// Returns `None` when the square is not a pass or a board point.
    pub fn to_sgf(&self) -> Option<String> {
        self.square.is_ok().then(|| {
            format!("{}{}", color_letter(self.stone), self.square.to_sgf())
        })
    }

    /// Parse a Japanese style move such as `B7-3` or `WPASS`.
    pub fn parse_japanese(text: &str, board_size: usize) -> Option<Move> {
        let text = text.trim();
        let mut chars = text.chars();
        let stone = color_from_letter(chars.next()?)?;
        let square = Square::parse_japanese(chars.as_str().trim(), board_size).ok()?;
        Some(Move::new(square, stone))
    }

    /// Japanese style move, e.g. `B7-3`. `None` like [`Move::to_sgf`].
    pub fn to_japanese(&self) -> Option<String> {
        self.square.is_ok().then(|| {
            format!("{}{}", color_letter(self.stone), self.square.to_japanese())
        })
    }

    /// Parse a GTP `<color> <vertex>` pair such as `B D4` or `white pass`.
    pub fn parse_gtp(text: &str, board_size: usize) -> Option<Move> {
        let mut parts = text.split_whitespace();
        let stone = parse_gtp_color(parts.next()?)?;
        let square = Square::parse_gtp(parts.next()?, board_size).ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Move::new(square, stone))
    }

    /// GTP `<color> <vertex>` pair, e.g. `B D4`.
    pub fn to_gtp(&self) -> Option<String> {
        let vertex = self.square.to_gtp()?;
        Some(format!("{} {vertex}", color_letter(self.stone)))
    }

    /// Play this move on `board`. See [`Board::make_move`].
    pub fn play_on(&self, board: &mut Board) -> bool {
        board.make_move(self.square, self.stone)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sgf().unwrap_or_default())
    }
}

/// Parse a GTP color argument (`b`, `black`, `w`, `white`, any case).
pub fn parse_gtp_color(text: &str) -> Option<Stone> {
    match text.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Stone::Black),
        "w" | "white" => Some(Stone::White),
        _ => None,
    }
}

fn color_from_letter(c: char) -> Option<Stone> {
    match c {
        'B' => Some(Stone::Black),
        'W' => Some(Stone::White),
        _ => None,
    }
}

fn color_letter(stone: Stone) -> char {
    if stone == Stone::White { 'W' } else { 'B' }
}
