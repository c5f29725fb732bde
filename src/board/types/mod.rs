//! Core board types.
//!
//! - `Piece`, `Side` and `Cell` - piece kinds and mailbox cell contents
//! - cell indices, direction offsets and square notation
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state of one side

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Cell, Piece, Side};
pub use square::{format_cell, parse_cell, A1, A8, BOARD_SIZE, E, H1, H8, N, S, W};

pub(crate) use square::{mirror, on_last_rank, step};
