//! Compact text records of a position.
//!
//! Format: `<size> <rows> <turn> <black captures> <white captures>`, e.g.
//!
//! ```text
//! 5 5/1B3/2W2/5/5 B 0 0
//! ```
//!
//! Rows run top to bottom and are separated by `/`. Inside a row a decimal
//! number is a run of empty points and `B`, `W`, `E` are single black, white
//! and error cells. The fields after the rows are optional.

use std::str::FromStr;

use thiserror::Error;

use crate::board::Board;
use crate::constants::is_valid_board_size;
use crate::square::Square;
use crate::stone::Stone;

/// Reasons a position record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty position record")]
    Empty,

    #[error("missing board rows")]
    MissingRows,

    #[error("invalid board size '{0}'")]
    InvalidBoardSize(String),

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} is {width} points wide, expected {size}")]
    RowWidth { row: usize, width: usize, size: usize },

    #[error("unexpected character '{0}' in board rows")]
    UnexpectedChar(char),

    #[error("invalid side to move '{0}'")]
    InvalidTurn(String),

    #[error("invalid capture count '{0}'")]
    InvalidCaptureCount(String),

    #[error("unexpected trailing field '{0}'")]
    TrailingField(String),
}

impl Board {
    /// Read a position record. Chains and liberties are rebuilt from the cells.
    pub fn from_fen(text: &str) -> Result<Board, FenError> {
        let mut fields = text.split_whitespace();

        let size_field = fields.next().ok_or(FenError::Empty)?;
        let board_size = size_field
            .parse::<usize>()
            .ok()
            .filter(|&n| is_valid_board_size(n))
            .ok_or_else(|| FenError::InvalidBoardSize(size_field.to_string()))?;

        let rows_field = fields.next().ok_or(FenError::MissingRows)?;
        let mut board = Board::blank(board_size);
        parse_rows(&mut board, rows_field)?;

        if let Some(turn) = fields.next() {
            let color = match turn {
                "B" | "b" => Stone::Black,
                "W" | "w" => Stone::White,
                _ => return Err(FenError::InvalidTurn(turn.to_string())),
            };
            board.set_turn(color);
        }

        let mut captures = [0u32; 2];
        for slot in &mut captures {
            if let Some(field) = fields.next() {
                *slot = field
                    .parse()
                    .map_err(|_| FenError::InvalidCaptureCount(field.to_string()))?;
            }
        }
        board.set_captures(captures[0], captures[1]);

        if let Some(extra) = fields.next() {
            return Err(FenError::TrailingField(extra.to_string()));
        }

        board.rebuild_groups();
        Ok(board)
    }

    /// Write a position record.
    pub fn to_fen(&self) -> String {
        let size = self.board_size();
        let mut out = format!("{size} ");

        for row in 0..size {
            if row > 0 {
                out.push('/');
            }
            let mut run = 0;
            for col in 0..size {
                match self[Square::at(col, row, size)].to_char() {
                    Some(c) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(c);
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }

        let turn = if self.turn() == Stone::White { 'W' } else { 'B' };
        out.push_str(&format!(
            " {turn} {} {}",
            self.black_captures(),
            self.white_captures()
        ));
        out
    }
}

/// Fill the cells of a freshly created board from the row field.
fn parse_rows(board: &mut Board, field: &str) -> Result<(), FenError> {
    let size = board.board_size();
    // A trailing separator after the last row is tolerated.
    let field = field.strip_suffix('/').unwrap_or(field);
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != size {
        return Err(FenError::RowCount {
            expected: size,
            found: rows.len(),
        });
    }

    for (row, text) in rows.iter().enumerate() {
        let mut col = 0;
        let mut run = 0;
        for c in text.chars() {
            if let Some(digit) = c.to_digit(10) {
                run = run * 10 + digit as usize;
                if col + run > size {
                    return Err(FenError::RowWidth {
                        row,
                        width: col + run,
                        size,
                    });
                }
                continue;
            }

            let stone = Stone::from_char(c).ok_or(FenError::UnexpectedChar(c))?;
            col += run;
            run = 0;
            if col >= size {
                return Err(FenError::RowWidth {
                    row,
                    width: col + 1,
                    size,
                });
            }
            board.set_cell(Square::at(col, row, size), stone);
            col += 1;
        }

        col += run;
        if col != size {
            return Err(FenError::RowWidth {
                row,
                width: col,
                size,
            });
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
