//! Cell colors.

use std::fmt;

/// The content of one cell of the padded grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stone {
    /// No stone.
    #[default]
    Empty,
    Black,
    White,
    /// Marker cell loaded from a position record; never placed by play.
    Error,
    /// Border cell outside the playing area.
    Wall,
}

impl Stone {
    /// The opposite color. Non-player values map to themselves.
    pub fn inv(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    /// Whether this is a player's stone (Black or White).
    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// Per-color slot for capture counters and tallies.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Stone::Black => Some(0),
            Stone::White => Some(1),
            _ => None,
        }
    }

    /// Letter used by position records and move notation.
    pub fn to_char(self) -> Option<char> {
        match self {
            Stone::Black => Some('B'),
            Stone::White => Some('W'),
            Stone::Error => Some('E'),
            Stone::Empty | Stone::Wall => None,
        }
    }

    /// Inverse of [`Stone::to_char`], case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Stone::Black),
            'W' => Some(Stone::White),
            'E' => Some(Stone::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
            Stone::Error => "error",
            Stone::Wall => "wall",
        };
        f.write_str(name)
    }
}
