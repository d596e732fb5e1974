//! Go-Engine: a Go (baduk/weiqi) position and rules engine.
//!
//! This crate keeps a board of any odd size from 3x3 to 27x27, maintains
//! stone chains and their liberties incrementally, and enforces captures,
//! suicide and simple ko. Positions can be rotated, cloned cheaply, and
//! stored as compact text records.
//!
//! ## Modules
//!
//! - [`constants`] - Board-size limits and padded-grid geometry
//! - [`stone`] - Cell colors
//! - [`square`] - Coordinates and their SGF, Japanese and GTP spellings
//! - [`group`] - Stone chains and the arena that owns them
//! - [`board`] - Core game logic (placement, captures, ko, legality)
//! - [`fen`] - Text records of a position
//! - [`notation`] - Moves as text
//! - [`playout`] - Random legal play
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_engine::{Board, Move, Square, Stone};
//!
//! let mut board = Board::new(9).unwrap();
//! let mv = Move::parse_sgf("B[ee]", 9).unwrap();
//! assert!(mv.play_on(&mut board));
//! assert_eq!(board[Square::new(4, 4, 9).unwrap()], Stone::Black);
//!
//! let copy = Board::from_fen(&board.to_fen()).unwrap();
//! assert_eq!(copy, board);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod fen;
pub mod group;
pub mod gtp;
pub mod notation;
pub mod playout;
pub mod square;
pub mod stone;

pub use board::Board;
pub use error::Error;
pub use fen::FenError;
pub use group::{GroupArena, GroupId, StoneGroup};
pub use notation::Move;
pub use square::Square;
pub use stone::Stone;
